//! Fixed response texts.
//!
//! Category-level fallback sentences, the general help response, and the
//! language-specific greeting and apology texts. All verbatim from the
//! deployed assistant.

use crate::knowledge::{Category, Language};

/// The category-level fallback sentence returned when no stored question is
/// similar enough to trust.
pub fn category_response(category: Category) -> &'static str {
    match category {
        Category::About => {
            "I can provide information about the Water Resources Department (WRD) Bihar, its history, and organizational structure. What specific information would you like to know?"
        }
        Category::Services => {
            "I can help you with WRD Bihar services including irrigation connections, water availability checks, and online applications. Please specify which service you need help with."
        }
        Category::Functions => {
            "The main functions of WRD Bihar include irrigation project management, flood control, drainage, and water resource planning. What specific function would you like to know about?"
        }
        Category::Documents => {
            "I can guide you about required documents for various WRD services including land records, Aadhaar card, voter ID, and agriculture documents. Which service documents do you need information about?"
        }
        Category::Charges => {
            "I can provide information about irrigation charges for different crops (Kharif, Rabi, Cash crops) and seasons. What specific charge information do you need?"
        }
        Category::Complaints => {
            "I can help you with the complaint process including online registration, tracking, and resolution. What type of complaint assistance do you need?"
        }
        Category::Contact => {
            "I can provide contact information for WRD Bihar offices including phone numbers, email, and office hours. What contact information do you need?"
        }
        Category::Schemes => {
            "I can provide information about government schemes like PMKSY and other water resource related schemes. Which scheme would you like to know about?"
        }
    }
}

/// The general help response used when the matching pipeline itself fails.
pub fn general_help_response() -> &'static str {
    "I'm here to help you with Bihar Water Resources Department (WRD) services and information. You can ask me about:\n- Irrigation connections and applications\n- Required documents and procedures\n- Irrigation charges and fees\n- Water availability status\n- Online complaint registration\n- Contact information\n- Government schemes like PMKSY\n\nPlease let me know what specific information you need."
}

/// The greeting returned for empty input or an untrained model.
pub fn default_response(language: Language) -> &'static str {
    match language {
        Language::Hindi => {
            "नमस्ते! मैं बिहार जल संसाधन विभाग (WRD) की सहायता के लिए यहाँ हूँ। मैं सिंचाई सेवाओं, दस्तावेज आवश्यकताओं, शुल्क जानकारी, और शिकायत प्रक्रिया में आपकी सहायता कर सकता हूँ। कृपया बताएं कि आपको किस जानकारी की आवश्यकता है?"
        }
        Language::English => {
            "Hello! I'm here to help you with Bihar Water Resources Department (WRD) services. I can assist you with irrigation connections, document requirements, charges information, and complaint procedures. How can I help you today?"
        }
    }
}

/// The apology returned when an unexpected failure reaches the response
/// boundary.
pub fn error_response(language: Language) -> &'static str {
    match language {
        Language::Hindi => {
            "क्षमा करें, मुझे आपके प्रश्न को समझने में कुछ कठिनाई हो रही है। कृपया दूसरे तरीके से पूछें।"
        }
        Language::English => {
            "I'm sorry, I'm having trouble understanding your question. Please try asking in a different way."
        }
    }
}
