//! Local fallback question bank for all six categories
//!
//! Used to top up a quiz when the backend returns fewer questions than the
//! session needs. Questions are written for 10th-grade students around
//! real-world scenarios; the first option is always the correct one, the
//! merger shuffles question order.

use crate::assessment::scoring::Category;
use crate::backend::types::QuizQuestion;

fn q(text: &str, options: [&str; 4], explanation: &str) -> QuizQuestion {
    QuizQuestion {
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index: 0,
        explanation: explanation.to_string(),
    }
}

/// Local questions for one category.
pub fn bank_for(category: Category) -> Vec<QuizQuestion> {
    match category {
        Category::Technical => technical_bank(),
        Category::Medical => medical_bank(),
        Category::Creative => creative_bank(),
        Category::Business => business_bank(),
        Category::Government => government_bank(),
        Category::Research => research_bank(),
    }
}

/// Resolve a category name to its bank, defaulting to the Technical bank
/// when the name is unrecognized.
pub fn fallback_bank(category_name: &str) -> Vec<QuizQuestion> {
    bank_for(Category::parse(category_name).unwrap_or(Category::Technical))
}

fn technical_bank() -> Vec<QuizQuestion> {
    vec![
        q(
            "Riya wants to build a website for her school project. What should she learn FIRST?",
            ["HTML & CSS", "Microsoft Word", "A calculator app", "MS Paint"],
            "HTML & CSS are the building blocks of every website. HTML creates the structure and CSS makes it look beautiful. Every web developer starts here!",
        ),
        q(
            "Your phone shows a warning: 'Unsecure network'. What does this mean?",
            [
                "Someone might spy on your data",
                "Your phone battery is low",
                "Screen brightness is too high",
                "WiFi signal is weak",
            ],
            "An unsecure (HTTP) network means data sent over it is not encrypted. Hackers on the same network could intercept your information. Always use secure (HTTPS) connections!",
        ),
        q(
            "Arjun wants to become a software developer. Which language is BEST to learn first?",
            ["Python", "Assembly language", "Machine code", "FORTRAN"],
            "Python has simple, English-like syntax making it perfect for beginners. It's used in web development, data science, AI, and automation. Very versatile!",
        ),
        q(
            "What does 'cloud storage' mean when someone says 'save your photos to the cloud'?",
            [
                "Storing files on remote internet servers",
                "Saving files in a rain cloud",
                "Printing and storing photos physically",
                "Deleting photos from your phone",
            ],
            "Cloud storage means your files are saved on powerful computer servers connected via the internet (like Google Drive or iCloud). You can access them from anywhere!",
        ),
        q(
            "Priya's computer is very slow. Which action is MOST likely to help?",
            [
                "Close unused programs and restart",
                "Buy a new monitor",
                "Change the wallpaper",
                "Unplug the keyboard",
            ],
            "Too many programs running at once use up RAM (memory) and processing power. Closing unused programs and restarting clears memory and fixes slowness!",
        ),
        q(
            "What is an 'app' on your smartphone?",
            [
                "A software program that performs specific tasks",
                "A type of phone charger",
                "The phone's camera",
                "A mobile network signal",
            ],
            "An app (application) is a software program designed for a specific purpose, like WhatsApp for messaging, YouTube for videos, or Maps for navigation.",
        ),
        q(
            "Mohan received an email from 'bank.security@gmail.com' asking for his account password. What should he do?",
            [
                "Delete it. Real banks never ask for passwords via email",
                "Reply with his password immediately",
                "Share it on social media",
                "Click all links in the email",
            ],
            "This is a phishing scam! Real banks NEVER ask for passwords via email. The sender used a fake email to steal information. Always verify through official bank websites or call centers.",
        ),
        q(
            "What does 'downloading' a file mean?",
            [
                "Copying a file from the internet to your device",
                "Sending a file from your device to the internet",
                "Deleting a file permanently",
                "Renaming a file on your computer",
            ],
            "Downloading = internet to your device. Uploading = your device to the internet. When you save a song or movie from YouTube, that's downloading!",
        ),
        q(
            "A website asks to 'allow cookies'. What are website cookies?",
            [
                "Small data files that save your preferences",
                "Actual food items in your computer",
                "Viruses that damage your PC",
                "Browser history deletion tools",
            ],
            "Website cookies are tiny text files that save your preferences, like staying logged in or remembering your shopping cart. They make browsing more convenient!",
        ),
        q(
            "Kavya wants to protect her email account. What is the STRONGEST password?",
            ["Kv@School2024!Sun#", "kavya123", "password", "12345678"],
            "Strong passwords are long (12+ characters) and mix uppercase, lowercase, numbers, and symbols. Never use simple words, your name, or '12345'. These are guessed in seconds by hackers!",
        ),
        q(
            "What happens when you press Ctrl+Z on a computer?",
            [
                "It undoes the last action",
                "It shuts down the computer",
                "It zooms in on the screen",
                "It saves the file",
            ],
            "Ctrl+Z is the universal 'Undo' shortcut. Made a mistake? Just press Ctrl+Z! Ctrl+Y or Ctrl+Shift+Z is 'Redo' to bring it back.",
        ),
        q(
            "What does 'WiFi' stand for?",
            [
                "Wireless Fidelity",
                "Wide Field Internet",
                "Wireless Frequency Interface",
                "Web File Interface",
            ],
            "WiFi stands for Wireless Fidelity. It's a technology that allows devices to connect to the internet wirelessly using radio waves instead of cables.",
        ),
    ]
}

fn medical_bank() -> Vec<QuizQuestion> {
    vec![
        q(
            "During summer, Meena feels very dizzy and her skin looks dry. What is she most likely suffering from?",
            ["Dehydration", "Common cold", "Dengue fever", "Food poisoning"],
            "Dizziness + dry skin in summer = classic dehydration signs. Our body needs 8-10 glasses of water daily. During summer or exercise, even more is needed. Drink water regularly!",
        ),
        q(
            "Raju's doctor says his blood sugar is very high. Which disease does he likely have?",
            ["Diabetes", "Malaria", "Typhoid", "Chickenpox"],
            "High blood sugar levels indicate Diabetes. Type 1 is genetic; Type 2 is often lifestyle-related. It's managed through diet, exercise, and sometimes medication.",
        ),
        q(
            "Which organ pumps blood throughout your entire body?",
            ["Heart", "Liver", "Lungs", "Kidneys"],
            "The heart is a muscular pump that beats 60-100 times per minute, pushing blood through 96,000 km of blood vessels to deliver oxygen and nutrients to every cell!",
        ),
        q(
            "Anita ate food from a street stall and got severe stomach pain, vomiting, and diarrhea. What does she likely have?",
            ["Food poisoning", "Appendicitis", "Heart attack", "Pneumonia"],
            "Vomiting + diarrhea shortly after eating = food poisoning. It's caused by bacteria (like Salmonella) in contaminated food. Rest, ORS (oral rehydration solution), and clean food prevent it.",
        ),
        q(
            "Why do doctors wash their hands before examining a patient?",
            [
                "To prevent spreading germs/infections",
                "Because water is healthy",
                "To make their hands look clean",
                "Hospital rules require it only",
            ],
            "Hand hygiene is the #1 way to prevent hospital-acquired infections. Doctors' hands can carry bacteria from patient to patient. Proper handwashing saves thousands of lives daily!",
        ),
        q(
            "What does a stethoscope measure?",
            [
                "Heartbeat and breathing sounds",
                "Blood pressure",
                "Body temperature",
                "Blood sugar levels",
            ],
            "A stethoscope amplifies sounds inside the body, especially heartbeats and lung sounds. Doctors use it to detect abnormal heart rhythms or fluid in lungs.",
        ),
        q(
            "Priya has a fever of 103 degrees F. What is the FIRST thing she should do?",
            [
                "Consult a doctor and rest",
                "Exercise intensely to sweat it out",
                "Eat very spicy food",
                "Take a very cold bath immediately",
            ],
            "High fever (above 102 degrees F) needs medical attention. Rest, hydration, and fever-reducing medicine (prescribed by doctor) help. Cold baths can cause shivering which raises body temperature further!",
        ),
        q(
            "Which vitamin do we get from sunlight?",
            ["Vitamin D", "Vitamin C", "Vitamin B12", "Vitamin A"],
            "Skin produces Vitamin D when exposed to sunlight (UV-B rays). Vitamin D is essential for strong bones and immune system. 15-20 minutes of morning sunlight daily is beneficial!",
        ),
        q(
            "Why is blood called the 'river of life' in our body?",
            [
                "It carries oxygen and nutrients to all body parts",
                "It flows like a river outside the body",
                "It is blue in color like water",
                "It keeps the body cool",
            ],
            "Blood delivers oxygen from lungs and nutrients from food to every cell. It also removes waste products (CO2). Without this transport system, cells would die within minutes!",
        ),
        q(
            "After a school exam, Rahul feels very tired despite sleeping 9 hours. The most likely reason is:",
            [
                "Poor nutrition and vitamin deficiency",
                "Too much sleep",
                "Studying too little",
                "Watching TV",
            ],
            "Fatigue despite adequate sleep often indicates poor nutrition, especially iron, B12, or Vitamin D deficiency. A balanced diet with fruits, vegetables, protein, and dairy is key to sustained energy!",
        ),
    ]
}

fn creative_bank() -> Vec<QuizQuestion> {
    vec![
        q(
            "Neha wants to design a logo for her school's event. Which FREE tool should she use?",
            ["Canva", "Microsoft Word", "Excel spreadsheet", "Google Maps"],
            "Canva is a free, beginner-friendly design tool with thousands of templates for logos, posters, social media graphics, and more. Perfect for school projects!",
        ),
        q(
            "A story has three main parts. What are they?",
            [
                "Beginning, Middle, End",
                "Introduction, Data, Conclusion",
                "Question, Research, Answer",
                "Plot, Setting, Theme",
            ],
            "Every good story has a Beginning (introduces characters/setting), Middle (conflict/problem), and End (resolution). This is called the narrative arc, used in books, movies, and plays!",
        ),
        q(
            "Rohan wants his poster to catch people's attention quickly. What design principle is MOST important?",
            [
                "Visual hierarchy: making key info bigger/bolder",
                "Using as many colors as possible",
                "Making all text the same size",
                "Adding lots of decorative borders",
            ],
            "Visual hierarchy guides the viewer's eye: the most important information should be largest/boldest. Good design communicates the key message in 3 seconds or less!",
        ),
        q(
            "What makes a good photograph according to photography basics?",
            [
                "Rule of thirds: subject placed at intersection points",
                "Always centering the subject",
                "Taking photos in the dark",
                "Using maximum zoom every time",
            ],
            "The Rule of Thirds divides the frame into a 3x3 grid. Placing subjects at intersection points creates balanced, interesting compositions. Most phone cameras have this grid feature!",
        ),
        q(
            "Siya is writing a poem. She wants two lines to sound similar at the end. What is this called?",
            ["Rhyme", "Metaphor", "Alliteration", "Simile"],
            "Rhyme is when words end with similar sounds. 'The sky is blue / and oceans too' - 'blue' and 'too' rhyme! Metaphor compares things without 'like/as', alliteration repeats beginning sounds.",
        ),
        q(
            "A filmmaker wants to show a character is scared WITHOUT showing their face. Which technique works BEST?",
            [
                "Show shaking hands or feet from close up",
                "Film the whole room from far away",
                "Use very bright, happy music",
                "Speed up the video",
            ],
            "Close-up shots of body parts (shaking hands, trembling knees) are powerful storytelling tools. They build tension and create emotional connection without showing the face. A classic cinematic technique!",
        ),
        q(
            "Which color combination creates the MOST contrast and is easiest to read?",
            [
                "Black text on white background",
                "Yellow text on white background",
                "Red text on orange background",
                "Blue text on dark blue background",
            ],
            "Black on white provides maximum contrast (ratio of 21:1). Good contrast is essential for readability, especially for people with vision difficulties. This is why most books use this combination!",
        ),
        q(
            "Aryan is creating an animation. What is the minimum frames-per-second (FPS) for smooth motion?",
            ["24 FPS", "5 FPS", "100 FPS", "1 FPS"],
            "Movies run at 24 FPS. The human eye perceives this as smooth motion. Below 15 FPS looks choppy. Video games often run at 60 FPS for even smoother experience!",
        ),
        q(
            "Priya is designing a school magazine. She has too much text and it looks boring. What should she add?",
            [
                "Images, infographics, and white space",
                "More text in different fonts",
                "Colored borders around everything",
                "Smaller text to fit more words",
            ],
            "Images break up text and make content digestible. White space (empty space) is a design tool: it gives the eye rest and makes content feel organized. 'Less is more' in good design!",
        ),
        q(
            "What does 'font' mean in design?",
            [
                "The style and size of text/letters",
                "The background color of text",
                "The spacing between paragraphs",
                "The number of words per page",
            ],
            "A font is a complete set of characters in a particular style (like Arial, Times New Roman, or Comic Sans). Different fonts create different moods: formal, playful, modern, or traditional!",
        ),
    ]
}

fn business_bank() -> Vec<QuizQuestion> {
    vec![
        q(
            "Ananya wants to sell handmade bracelets. What should she research FIRST before starting?",
            [
                "Who her customers are and what they'll pay",
                "The most expensive materials available",
                "How to make the most complicated design",
                "How many bracelets she can make per hour",
            ],
            "Market research, understanding your customers (target audience) and pricing, is the foundation of any successful business. Knowing who will buy and at what price prevents losing money!",
        ),
        q(
            "Rahul started a juice stall. He spent Rs. 500 making juice and earned Rs. 800 selling it. What is his PROFIT?",
            ["Rs. 300", "Rs. 800", "Rs. 500", "Rs. 1300"],
            "Profit = Revenue - Cost = Rs. 800 - Rs. 500 = Rs. 300. This basic formula is the most fundamental concept in business and accounting!",
        ),
        q(
            "What does 'marketing' mean for a business?",
            [
                "Telling people about your product to attract buyers",
                "Making the product in a factory",
                "Counting money at the end of the day",
                "Hiring employees for the office",
            ],
            "Marketing is about creating awareness and interest in your product/service. It includes advertising, social media, word-of-mouth, and promotions to attract and retain customers.",
        ),
        q(
            "Meera's lemonade stand ran out of lemons. She couldn't serve customers and lost Rs. 200. This is an example of:",
            [
                "Poor supply chain management",
                "Great marketing strategy",
                "Excellent customer service",
                "Perfect financial planning",
            ],
            "Supply chain management ensures you have the right materials/products at the right time. Running out of stock (like lemons) = lost sales and unhappy customers. Planning supply is critical in business!",
        ),
        q(
            "What is the purpose of a business 'advertisement'?",
            [
                "To attract customers by showing the product's value",
                "To hide business secrets from competitors",
                "To explain tax rules to employees",
                "To count daily sales figures",
            ],
            "Advertisements communicate value propositions: why customers should choose YOUR product. Good ads tell a story, show a benefit, or solve a problem the customer has.",
        ),
        q(
            "Raj borrowed Rs. 10,000 from a bank at 10% annual interest. How much does he owe after 1 year?",
            ["Rs. 11,000", "Rs. 10,000", "Rs. 9,000", "Rs. 20,000"],
            "Interest = Principal x Rate x Time = Rs. 10,000 x 10% x 1 = Rs. 1,000. Total owed = Rs. 10,000 + Rs. 1,000 = Rs. 11,000. Understanding interest is crucial for financial literacy!",
        ),
        q(
            "A customer is unhappy with a product. What should a good business do FIRST?",
            [
                "Listen carefully and try to solve their problem",
                "Ignore the complaint and move on",
                "Argue that the customer is wrong",
                "Immediately give a refund without checking",
            ],
            "Customer service excellence starts with listening. 68% of customers leave because they feel unappreciated. Resolving complaints well often creates loyal customers who recommend your business!",
        ),
        q(
            "Why do businesses need to keep financial records (accounts)?",
            [
                "To track income, expenses, and pay correct taxes",
                "To show off to competitors",
                "Because it's a fun hobby",
                "To make the office look official",
            ],
            "Financial records help businesses know if they're profitable, plan future spending, and pay correct taxes (avoiding legal trouble). Good accounting = healthy business!",
        ),
        q(
            "What is an 'e-commerce' business?",
            [
                "A business that sells products/services online",
                "A business that uses electricity",
                "An electricity supply company",
                "A business with electronic machines",
            ],
            "E-commerce (electronic commerce) is buying and selling via the internet. Amazon, Flipkart, and Meesho are examples. India's e-commerce market is growing rapidly!",
        ),
        q(
            "Priya wants to expand her fashion boutique. What is the FIRST step in strategic planning?",
            [
                "Define clear goals (how many sales, by when?)",
                "Buy the most expensive equipment immediately",
                "Hire 10 employees on day one",
                "Change the shop name to sound bigger",
            ],
            "Strategic planning starts with SMART goals: Specific, Measurable, Achievable, Relevant, Time-bound. Without clear goals, businesses waste resources going in wrong directions!",
        ),
    ]
}

fn government_bank() -> Vec<QuizQuestion> {
    vec![
        q(
            "Priya wants to become an IAS officer. Which exam must she clear?",
            [
                "UPSC Civil Services Examination",
                "JEE Advanced",
                "NEET",
                "CAT",
            ],
            "The UPSC (Union Public Service Commission) Civil Services Exam selects IAS, IPS, and IFS officers. It's one of India's most competitive exams with 3 stages: Prelims, Mains, and Interview.",
        ),
        q(
            "Which government body makes laws for the entire country of India?",
            [
                "Parliament (Lok Sabha + Rajya Sabha)",
                "Supreme Court",
                "Cabinet of Ministers",
                "Election Commission",
            ],
            "India's Parliament (Sansad) consists of Lok Sabha (Lower House, directly elected) and Rajya Sabha (Upper House, elected by state legislatures). Both houses must approve laws before they become official.",
        ),
        q(
            "Rohan wants to serve in the Indian Army. Which exam should he prepare for?",
            [
                "NDA (National Defence Academy) exam",
                "UPSC IAS exam",
                "GATE exam",
                "IBPS bank exam",
            ],
            "NDA exam is conducted by UPSC for entry into Army, Navy, and Air Force after 12th (PCM for Air Force/Navy, any stream for Army). CDS exam is for graduates. Both are prestigious paths!",
        ),
        q(
            "What is the Right to Information (RTI) Act?",
            [
                "A law allowing citizens to ask government departments for information",
                "A law banning information on the internet",
                "A school education policy",
                "A tax law for businesses",
            ],
            "RTI Act (2005) empowers every Indian citizen to ask any government department for information. It promotes transparency and accountability. This is a fundamental tool against corruption!",
        ),
        q(
            "Meena wants to work in a government bank. Which exam should she prepare for?",
            [
                "IBPS PO (Institute of Banking Personnel Selection)",
                "UPSC IAS",
                "JEE Main",
                "NEET",
            ],
            "IBPS PO (Probationary Officer) and IBPS Clerk exams are gateway to government banking jobs in banks like Punjab National Bank, Bank of Baroda, etc. SBI PO is for State Bank of India specifically.",
        ),
        q(
            "What does 'panchayati raj' mean?",
            [
                "A system of local self-government in villages",
                "A national parliament",
                "A central government ministry",
                "A state police department",
            ],
            "Panchayati Raj is a 3-tier system of local governance in rural India: Gram Panchayat (village level), Panchayat Samiti (block level), Zila Parishad (district level). It empowers local communities!",
        ),
        q(
            "Which fundamental right guarantees that no person can be imprisoned without a legal reason?",
            [
                "Right to Freedom (Article 19-22)",
                "Right to Education (Article 21A)",
                "Right to Property",
                "Right to Constitutional Remedies",
            ],
            "Article 22 (Right to Freedom) protects against arbitrary arrest and detention. Police must inform you of charges and produce you before a magistrate within 24 hours. Habeas Corpus ensures this!",
        ),
        q(
            "What does the term 'secular' mean in India's Constitution?",
            [
                "India has no official state religion. All religions are equal",
                "Only Hinduism is the official religion",
                "Religion is banned in India",
                "The government controls all religions",
            ],
            "Secular means the state treats all religions equally and maintains separation from religion. India's Constitution guarantees freedom of religion to all citizens, regardless of faith.",
        ),
        q(
            "India's Constitution was adopted on which date?",
            [
                "26 November 1949",
                "15 August 1947",
                "26 January 1950",
                "2 October 1948",
            ],
            "India's Constitution was adopted on 26 November 1949 (celebrated as Constitution Day/Samvidhan Divas). It came into effect on 26 January 1950, celebrated as Republic Day!",
        ),
        q(
            "What is the minimum age to vote in Indian elections?",
            ["18 years", "21 years", "16 years", "25 years"],
            "The voting age was lowered from 21 to 18 years by the 61st Constitutional Amendment in 1988. Every Indian citizen aged 18+ has the right to vote. This is the foundation of democracy!",
        ),
    ]
}

fn research_bank() -> Vec<QuizQuestion> {
    vec![
        q(
            "Ananya is doing a science experiment and gets unexpected results. What should she do?",
            [
                "Record the results honestly and investigate why",
                "Change the results to match expectations",
                "Ignore the experiment and try again",
                "Declare the experiment failed and stop",
            ],
            "Unexpected results are the heart of discovery! Many great inventions (like penicillin) came from unexpected observations. Honest recording and investigating anomalies is the scientific method!",
        ),
        q(
            "Rahul reads that 'Scientists discover chocolate cures all diseases!' Should he believe this immediately?",
            [
                "No. One study isn't enough proof; check multiple sources",
                "Yes. Scientists are always right",
                "Yes. Chocolate is delicious so it must be healthy",
                "No. All science is fake news",
            ],
            "Scientific claims require replication (same result in multiple studies). One sensational headline is rarely the full truth. Always check: Who conducted the study? Was it peer-reviewed? How many participants?",
        ),
        q(
            "What is the FIRST step in the scientific method?",
            [
                "Observation and asking a question",
                "Forming a conclusion",
                "Conducting an experiment",
                "Publishing results",
            ],
            "Science begins with curiosity! Step 1: Observe something interesting. Step 2: Ask 'Why/How?' Step 3: Form a hypothesis. Step 4: Test with experiments. Step 5: Analyze results. Step 6: Draw conclusions.",
        ),
        q(
            "Priya is writing a research report. She copied text directly from a book without crediting the author. This is called:",
            [
                "Plagiarism, which is unethical and often illegal",
                "Good research practice",
                "Smart shortcut",
                "Proper citation",
            ],
            "Plagiarism is presenting someone else's work as your own without giving credit. It's unethical and can have serious consequences. Always cite your sources: 'According to [Author], [year]...'",
        ),
        q(
            "Scientists test a new medicine on 10 people and it works for all of them. Can they be sure it works for everyone?",
            [
                "No. 10 people is too small a sample size",
                "Yes. 100% success rate proves it works",
                "Yes. Any positive result confirms the medicine works",
                "Only if the 10 people are friends of the scientists",
            ],
            "Sample size matters enormously! A study with 10 people cannot represent billions of diverse humans. Clinical trials typically need thousands of participants to provide statistically valid results.",
        ),
        q(
            "What does the term 'hypothesis' mean?",
            [
                "An educated guess based on observation that can be tested",
                "A proven scientific fact",
                "A research paper conclusion",
                "A type of laboratory equipment",
            ],
            "A hypothesis is a proposed explanation based on limited evidence. It's a starting point for investigation, NOT a proven fact. It must be testable and falsifiable (capable of being proven wrong).",
        ),
        q(
            "Which of these is the BEST evidence for a scientific claim?",
            [
                "Results from 5 independent studies all showing the same thing",
                "One person's personal experience",
                "A celebrity's recommendation",
                "A popular opinion poll",
            ],
            "Scientific consensus (multiple independent studies reaching same conclusion) is the strongest evidence. Personal testimonials are anecdotal: they don't control for other variables affecting the outcome.",
        ),
        q(
            "Rohan wants to measure how much time students spend on phones. What research method should he use?",
            [
                "Survey/questionnaire with many students",
                "Ask only his best friends",
                "Guess based on his own usage",
                "Read a 10-year-old book on the topic",
            ],
            "Surveys collect data from a large, diverse group making results more representative. Primary research (collecting your own data) is more current and relevant than relying solely on old secondary sources!",
        ),
        q(
            "What is ISRO famous for in India?",
            [
                "Space research and launching satellites",
                "Teaching in schools",
                "Producing Bollywood films",
                "Building roads and bridges",
            ],
            "ISRO (Indian Space Research Organisation) is India's national space agency. It successfully launched Chandrayaan (Moon mission), Mangalyaan (Mars mission), and hundreds of satellites. India is a world leader in affordable space technology!",
        ),
        q(
            "Why do scientists write their findings in research papers and publish them?",
            [
                "So other scientists can verify, replicate, and build upon the work",
                "To show off their intelligence",
                "Because it is required by law",
                "To earn money from paper sales",
            ],
            "Scientific publications allow peer review: other experts check the methodology and results for errors. This process validates findings and allows science to be built cumulatively, accelerating human knowledge!",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_a_bank() {
        for category in Category::ALL {
            let bank = bank_for(category);
            assert!(bank.len() >= 10, "{} bank too small", category);
        }
    }

    #[test]
    fn test_bank_questions_are_well_formed() {
        for category in Category::ALL {
            for question in bank_for(category) {
                assert_eq!(question.options.len(), 4);
                assert!(question.correct_index < question.options.len());
                assert!(!question.text.is_empty());
                assert!(!question.explanation.is_empty());
            }
        }
    }

    #[test]
    fn test_bank_texts_are_unique_within_category() {
        for category in Category::ALL {
            let bank = bank_for(category);
            let texts: HashSet<String> = bank
                .iter()
                .map(|q| q.text.trim().to_lowercase())
                .collect();
            assert_eq!(texts.len(), bank.len());
        }
    }

    #[test]
    fn test_unknown_category_falls_back_to_technical() {
        let fallback = fallback_bank("Astrology");
        let technical = bank_for(Category::Technical);

        assert_eq!(fallback.len(), technical.len());
        assert_eq!(fallback[0].text, technical[0].text);
    }
}
