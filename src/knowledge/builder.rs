//! Knowledge base and corpus assembly.
//!
//! The builder combines the hand-authored English and Hindi entries with an
//! enrichment mapping and expands every entry into keyword-driven question
//! variants. The result is deterministic for a given entry list and
//! enrichment mapping.

use crate::knowledge::category::Category;
use crate::knowledge::corpus::Corpus;
use crate::knowledge::enrichment::Enrichment;
use crate::knowledge::entry::{KnowledgeBase, KnowledgeEntry, Language};

/// Builds the knowledge base and training corpus.
#[derive(Debug, Clone)]
pub struct KnowledgeBaseBuilder {
    entries: Vec<KnowledgeEntry>,
}

impl Default for KnowledgeBaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBaseBuilder {
    /// Create a builder seeded with the fixed literal entries.
    pub fn new() -> Self {
        KnowledgeBaseBuilder {
            entries: default_entries(),
        }
    }

    /// Create a builder over a custom entry list.
    pub fn with_entries(entries: Vec<KnowledgeEntry>) -> Self {
        KnowledgeBaseBuilder { entries }
    }

    /// The entries this builder will expand.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Assemble the knowledge base and the ordered training corpus.
    ///
    /// Enrichment terms become additional entries (term as question,
    /// description as answer, term as its own keyword) appended after the
    /// literal list, so they go through the same variant expansion.
    pub fn build(&self, enrichment: &Enrichment) -> (KnowledgeBase, Corpus) {
        let mut all_entries = self.entries.clone();
        for (&category, terms) in enrichment.map() {
            for (term, description) in terms {
                all_entries.push(KnowledgeEntry::new(
                    term,
                    description,
                    category,
                    Language::English,
                    term,
                ));
            }
        }

        let mut knowledge_base = KnowledgeBase::new();
        let mut corpus = Corpus::new();

        for entry in &all_entries {
            corpus.push(entry.question.clone(), entry.answer.clone(), entry.category);
            knowledge_base.insert(
                entry.category,
                question_key(&entry.question),
                entry.answer.clone(),
            );

            for keyword in entry.keyword_list() {
                for variant in question_variations(keyword, entry.category) {
                    corpus.push(variant, entry.answer.clone(), entry.category);
                }
            }
        }

        (knowledge_base, corpus)
    }
}

/// Normalize a question into its knowledge-base key.
fn question_key(question: &str) -> String {
    question.to_lowercase().replace('?', "").trim().to_string()
}

/// Generate the fixed question variants for a keyword.
///
/// Ten templates for every category; Services gets four extra
/// application-oriented ones.
pub fn question_variations(keyword: &str, category: Category) -> Vec<String> {
    let mut variations = vec![
        keyword.to_string(),
        format!("what is {keyword}"),
        format!("how to get {keyword}"),
        format!("information about {keyword}"),
        format!("tell me about {keyword}"),
        format!("help with {keyword}"),
        format!("{keyword} procedure"),
        format!("{keyword} process"),
        format!("apply for {keyword}"),
        format!("{keyword} application"),
    ];

    if category == Category::Services {
        variations.extend([
            format!("how to apply for {keyword}"),
            format!("{keyword} online"),
            format!("{keyword} documents required"),
            format!("{keyword} fees"),
        ]);
    }

    variations
}

/// The fixed literal knowledge entries (English, then Hindi).
pub fn default_entries() -> Vec<KnowledgeEntry> {
    let mut entries = vec![
        KnowledgeEntry::new(
            "What is Water Resources Department Bihar?",
            "Water Resources Department (WRD) is a key establishment of Government of Bihar, formerly known as Irrigation Department. It handles major and medium irrigation projects, inter-state river water sharing, and irrigation potential creation.",
            Category::About,
            Language::English,
            "water resources department, WRD, irrigation, bihar government, about",
        ),
        KnowledgeEntry::new(
            "What are the main functions of WRD Bihar?",
            "Main functions include: 1) Construction and maintenance of major irrigation projects, 2) Inter-state river water sharing, 3) Flood control and drainage, 4) Irrigation potential creation and utilization, 5) Water resource management and planning.",
            Category::Functions,
            Language::English,
            "functions, irrigation projects, flood control, water management, inter-state rivers",
        ),
        KnowledgeEntry::new(
            "How to apply for irrigation connection?",
            "To apply for irrigation connection: 1) Visit your nearest WRD office, 2) Fill application form with required documents, 3) Submit fees as per government rates, 4) Application will be processed within 30 days, 5) You will receive connection details via SMS/email.",
            Category::Services,
            Language::English,
            "irrigation connection, application, apply, documents, fees, process",
        ),
        KnowledgeEntry::new(
            "What documents are required for irrigation connection?",
            "Required documents: 1) Land ownership documents, 2) Aadhaar card, 3) Voter ID, 4) Agriculture land records, 5) Bank account details, 6) Passport size photographs, 7) Caste certificate (if applicable).",
            Category::Documents,
            Language::English,
            "documents required, land records, aadhaar, voter id, agriculture, bank account",
        ),
        KnowledgeEntry::new(
            "What are the irrigation charges?",
            "Irrigation charges vary by crop type and season: Kharif crops: Rs. 50-100 per acre, Rabi crops: Rs. 75-150 per acre, Cash crops: Rs. 200-500 per acre. Additional charges may apply for maintenance and development.",
            Category::Charges,
            Language::English,
            "irrigation charges, fees, kharif, rabi, cash crops, rates, per acre",
        ),
        KnowledgeEntry::new(
            "How to check irrigation water availability?",
            "Check water availability through: 1) Official website portal, 2) Mobile app, 3) SMS service by sending WATER to 56070, 4) Contact local irrigation office, 5) Visit nearest canal division office.",
            Category::Services,
            Language::English,
            "water availability, check, portal, mobile app, SMS, canal division",
        ),
        KnowledgeEntry::new(
            "What to do in case of drainage problems?",
            "For drainage problems: 1) Register complaint online or at office, 2) Provide location details and problem description, 3) Complaint will be assigned to field engineer, 4) Resolution within 7-15 days, 5) Follow up through complaint number.",
            Category::Complaints,
            Language::English,
            "drainage problems, complaint, register, field engineer, resolution, follow up",
        ),
        KnowledgeEntry::new(
            "Contact information for WRD Bihar?",
            "Contact Details: Main Office: Patna, Phone: 0612-2223456, Email: wrd.bihar@gov.in, Website: fmiscwrdbihar.gov.in, Toll-free: 1800-345-6789, Office Hours: 10 AM to 5 PM (Mon-Fri)",
            Category::Contact,
            Language::English,
            "contact information, phone, email, website, office hours, toll-free",
        ),
        KnowledgeEntry::new(
            "How to register complaint online?",
            "To register complaint online: 1) Visit official website, 2) Go to complaint section, 3) Fill complaint form with details, 4) Upload supporting documents if any, 5) Submit and note complaint number, 6) Track status using complaint number.",
            Category::Complaints,
            Language::English,
            "online complaint, register, website, complaint number, track status",
        ),
        KnowledgeEntry::new(
            "What is PMKSY scheme?",
            "PMKSY (Pradhan Mantri Krishi Sinchayee Yojana) is a Central Government scheme for improving irrigation coverage. It focuses on micro-irrigation, watershed development, and per drop more crop strategy. Apply through designated officers.",
            Category::Schemes,
            Language::English,
            "PMKSY, Pradhan Mantri Krishi Sinchayee Yojana, micro irrigation, watershed, central scheme",
        ),
    ];

    entries.extend(vec![
        KnowledgeEntry::new(
            "बिहार जल संसाधन विभाग क्या है?",
            "जल संसाधन विभाग (WRD) बिहार सरकार का एक मुख्य विभाग है, जो पहले सिंचाई विभाग के नाम से जाना जाता था। यह प्रमुख और मध्यम सिंचाई परियोजनाओं, अंतर्राज्यीय नदी जल साझाकरण और सिंचाई क्षमता निर्माण का काम करता है।",
            Category::About,
            Language::Hindi,
            "जल संसाधन विभाग, सिंचाई, बिहार सरकार, के बारे में",
        ),
        KnowledgeEntry::new(
            "सिंचाई कनेक्शन के लिए कैसे आवेदन करें?",
            "सिंचाई कनेक्शन के लिए आवेदन: 1) नजदीकी WRD कार्यालय जाएं, 2) आवश्यक दस्तावेजों के साथ आवेदन फॉर्म भरें, 3) सरकारी दरों के अनुसार फीस जमा करें, 4) 30 दिनों में आवेदन प्रक्रिया होगी, 5) SMS/ईमेल के माध्यम से कनेक्शन विवरण मिलेगा।",
            Category::Services,
            Language::Hindi,
            "सिंचाई कनेक्शन, आवेदन, दस्तावेज, फीस, प्रक्रिया",
        ),
        KnowledgeEntry::new(
            "सिंचाई कनेक्शन के लिए कौन से दस्तावेज चाहिए?",
            "आवश्यक दस्तावेज: 1) भूमि स्वामित्व दस्तावेज, 2) आधार कार्ड, 3) मतदाता पहचान पत्र, 4) कृषि भूमि रिकॉर्ड, 5) बैंक खाता विवरण, 6) पासपोर्ट साइज फोटो, 7) जाति प्रमाण पत्र (यदि लागू हो)।",
            Category::Documents,
            Language::Hindi,
            "दस्तावेज, भूमि रिकॉर्ड, आधार, मतदाता पहचान पत्र, कृषि, बैंक खाता",
        ),
        KnowledgeEntry::new(
            "सिंचाई शुल्क क्या है?",
            "सिंचाई शुल्क फसल के प्रकार और मौसम के अनुसार: खरीफ फसल: 50-100 रुपये प्रति एकड़, रबी फसल: 75-150 रुपये प्रति एकड़, नकदी फसल: 200-500 रुपये प्रति एकड़। रखरखाव और विकास के लिए अतिरिक्त शुल्क हो सकता है।",
            Category::Charges,
            Language::Hindi,
            "सिंचाई शुल्क, फीस, खरीफ, रबी, नकदी फसल, दरें, प्रति एकड़",
        ),
        KnowledgeEntry::new(
            "सिंचाई पानी की उपलब्धता कैसे चेक करें?",
            "पानी की उपलब्धता चेक करने के तरीके: 1) आधिकारिक वेबसाइट पोर्टल, 2) मोबाइल ऐप, 3) 56070 पर WATER भेजकर SMS सेवा, 4) स्थानीय सिंचाई कार्यालय से संपर्क, 5) नजदीकी नहर डिवीजन कार्यालय जाएं।",
            Category::Services,
            Language::Hindi,
            "पानी उपलब्धता, चेक, पोर्टल, मोबाइल ऐप, SMS, नहर डिवीजन",
        ),
        KnowledgeEntry::new(
            "ऑनलाइन शिकायत कैसे दर्ज करें?",
            "ऑनलाइन शिकायत दर्ज करने के लिए: 1) आधिकारिक वेबसाइट पर जाएं, 2) शिकायत सेक्शन में जाएं, 3) विवरण के साथ शिकायत फॉर्म भरें, 4) यदि कोई सहायक दस्तावेज हो तो अपलोड करें, 5) सबमिट करें और शिकायत नंबर नोट करें, 6) शिकायत नंबर से स्थिति ट्रैक करें।",
            Category::Complaints,
            Language::Hindi,
            "ऑनलाइन शिकायत, दर्ज, वेबसाइट, शिकायत नंबर, ट्रैक स्थिति",
        ),
        KnowledgeEntry::new(
            "संपर्क जानकारी WRD बिहार?",
            "संपर्क विवरण: मुख्य कार्यालय: पटना, फोन: 0612-2223456, ईमेल: wrd.bihar@gov.in, वेबसाइट: fmiscwrdbihar.gov.in, टोल-फ्री: 1800-345-6789, कार्यालय समय: 10 AM से 5 PM (सोम-शुक्र)",
            Category::Contact,
            Language::Hindi,
            "संपर्क जानकारी, फोन, ईमेल, वेबसाइट, कार्यालय समय, टोल-फ्री",
        ),
        KnowledgeEntry::new(
            "PMKSY योजना क्या है?",
            "PMKSY (प्रधानमंत्री कृषि सिंचाई योजना) सिंचाई कवरेज सुधारने के लिए केंद्र सरकार की योजना है। यह सूक्ष्म सिंचाई, वाटरशेड विकास, और प्रति बूंद अधिक फसल रणनीति पर केंद्रित है। नामित अधिकारियों के माध्यम से आवेदन करें।",
            Category::Schemes,
            Language::Hindi,
            "PMKSY, प्रधानमंत्री कृषि सिंचाई योजना, सूक्ष्म सिंचाई, वाटरशेड, केंद्रीय योजना",
        ),
    ]);

    entries
}
