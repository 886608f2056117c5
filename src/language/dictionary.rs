//! Fixed bilingual dictionaries for government-service vocabulary.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Hindi-to-English word mappings for government and water-resources terms.
///
/// Multi-word keys are matched as phrases before the word-by-word pass.
const HI_EN_PAIRS: &[(&str, &str)] = &[
    ("पानी", "water"),
    ("बिजली", "electricity"),
    ("सेवा", "service"),
    ("विभाग", "department"),
    ("आवेदन", "application"),
    ("प्रमाण पत्र", "certificate"),
    ("जन्म प्रमाण पत्र", "birth certificate"),
    ("मृत्यु प्रमाण पत्र", "death certificate"),
    ("राशन कार्ड", "ration card"),
    ("ड्राइविंग लाइसेंस", "driving license"),
    ("पासपोर्ट", "passport"),
    ("संपत्ति कर", "property tax"),
    ("नगर निगम", "municipal corporation"),
    ("स्वास्थ्य विभाग", "health department"),
    ("शिक्षा विभाग", "education department"),
    ("परिवहन विभाग", "transport department"),
    ("ऑनलाइन", "online"),
    ("फीस", "fees"),
    ("दस्तावेज", "documents"),
    ("आवश्यक", "required"),
    ("सहायता", "help"),
    ("जानकारी", "information"),
    ("प्रक्रिया", "procedure"),
    ("नमस्ते", "hello"),
    ("स्वागत", "welcome"),
    ("पता", "address"),
    ("ईमेल", "email"),
    ("फोन", "phone"),
    ("सरकार", "government"),
    ("संसाधन", "resources"),
    ("योजना", "scheme"),
    // Water-resources domain terms.
    ("सिंचाई", "irrigation"),
    ("शुल्क", "charges"),
    ("कनेक्शन", "connection"),
    ("शिकायत", "complaint"),
    ("नहर", "canal"),
    ("फसल", "crop"),
    ("खरीफ", "kharif"),
    ("रबी", "rabi"),
    ("उपलब्धता", "availability"),
    ("संपर्क", "contact"),
    ("कार्यालय", "office"),
    ("क्या", "what"),
    ("कैसे", "how"),
    ("है", "is"),
    ("करें", "do"),
    ("लिए", "for"),
];

/// Hindi-to-English dictionary.
pub static HI_EN_DICT: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HI_EN_PAIRS.iter().copied().collect());

/// Multi-word Hindi phrases, longest first so the most specific phrase wins
/// (e.g. "जन्म प्रमाण पत्र" before "प्रमाण पत्र").
pub static HI_EN_PHRASES: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
    let mut phrases: Vec<_> = HI_EN_PAIRS
        .iter()
        .copied()
        .filter(|(hi, _)| hi.contains(' '))
        .collect();
    phrases.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
    phrases
});

/// English-to-Hindi dictionary (reverse of [`HI_EN_DICT`]).
///
/// Duplicate English values keep the last Hindi key, matching the original
/// table's reversal behavior.
pub static EN_HI_DICT: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HI_EN_PAIRS.iter().map(|&(hi, en)| (en, hi)).collect());

/// Canned Hindi answers keyed by English phrases.
///
/// Checked in order before any word-by-word substitution; more specific
/// phrases come before the generic "help" entry.
pub const HINDI_PHRASE_RESPONSES: &[(&str, &str)] = &[
    (
        "water supply",
        "पानी की आपूर्ति सेवाओं में कनेक्शन, बिलिंग और रखरखाव शामिल है। सहायता के लिए स्थानीय जल विभाग से संपर्क करें।",
    ),
    (
        "electricity",
        "बिजली सेवाओं में नए कनेक्शन, बिल भुगतान और खराबी की रिपोर्ट शामिल है। बिजली बोर्ड कार्यालय जाएं।",
    ),
    (
        "birth certificate",
        "जन्म प्रमाण पत्र रजिस्ट्रार कार्यालय से प्राप्त किया जा सकता है। आवश्यक दस्तावेजों में अस्पताल के रिकॉर्ड शामिल हैं।",
    ),
    (
        "irrigation charges",
        "सिंचाई शुल्क: खरीफ 50-100 रुपये/एकड़, रबी 75-150 रुपये/एकड़, नकदी फसल 200-500 रुपये/एकड़। रखरखाव के लिए अतिरिक्त शुल्क लग सकता है।",
    ),
    (
        "help",
        "मैं सरकारी सेवाओं और जानकारी के साथ आपकी सहायता के लिए यहाँ हूँ। आप मुझसे पूछ सकते हैं:\n- सरकारी सेवाएं (पानी, बिजली, प्रमाण पत्र, आदि)\n- विभाग की जानकारी\n- आवेदन प्रक्रियाएं\n- दस्तावेज आवश्यकताएं",
    ),
];
