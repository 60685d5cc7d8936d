//! 病害レコード定義
//!
//! 18件の固定レコードと、小文字名をキーにした索引。
//! 起動後に変更されることはない。

use serde::Serialize;
use std::collections::HashMap;

/// 病害レコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiseaseRecord {
    /// 照合キー（小文字）
    pub name: &'static str,
    pub description: &'static str,
    pub treatment: &'static str,
    pub prevention: &'static str,
}

const fn record(
    name: &'static str,
    description: &'static str,
    treatment: &'static str,
    prevention: &'static str,
) -> DiseaseRecord {
    DiseaseRecord { name, description, treatment, prevention }
}

/// 全レコード（表示順）
pub static DISEASES: [DiseaseRecord; 18] = [
    record(
        "rust",
        "Rust causes orange, yellow, or brown pustules on leaves and stems, weakening the plant.",
        "Use fungicides and remove infected plant parts.",
        "Ensure proper air circulation and avoid overhead watering.",
    ),
    record(
        "fungi",
        "Fungal infections can cause discoloration, wilting, and stunted growth in plants.",
        "Apply appropriate fungicides and remove affected areas.",
        "Maintain clean gardening tools and avoid overwatering.",
    ),
    record(
        "powdery mildew",
        "A white, powdery substance appears on leaves, stems, and flowers, reducing plant health.",
        "Use sulfur-based fungicides or neem oil.",
        "Avoid high humidity and ensure good air circulation.",
    ),
    record(
        "water deficiency",
        "Plants show wilting, dry leaves, and slowed growth due to insufficient water.",
        "Water plants deeply and regularly.",
        "Monitor soil moisture and mulch to retain water.",
    ),
    record(
        "nutrient deficiency",
        "Yellowing, stunted growth, or poor fruit/flower development caused by lack of essential nutrients.",
        "Use fertilizers tailored to the plant’s needs.",
        "Conduct soil tests and fertilize accordingly.",
    ),
    record(
        "water excess or uneven watering",
        "Overwatering or irregular watering causes root rot, yellowing leaves, or poor growth.",
        "Improve drainage and water consistently.",
        "Use well-draining soil and water only when needed.",
    ),
    record(
        "black spot",
        "Circular black spots on leaves, often leading to leaf drop, caused by a fungal infection.",
        "Use fungicides and remove infected leaves.",
        "Avoid wetting leaves and ensure good airflow.",
    ),
    record(
        "feeding damage by insects",
        "Leaves show holes, discoloration, or curling caused by insect feeding.",
        "Use insecticidal sprays or introduce natural predators like ladybugs.",
        "Regularly inspect plants for pests and maintain garden hygiene.",
    ),
    record(
        "animalia",
        "Damage caused by animals like rodents, deer, or birds, resulting in chewed leaves or stems.",
        "Use repellents or barriers like fencing.",
        "Protect plants with nets or cages.",
    ),
    record(
        "insecta",
        "Insect infestations can cause leaf damage, stunted growth, and disease transmission.",
        "Apply insecticides or neem oil.",
        "Encourage beneficial insects and avoid overfertilizing.",
    ),
    record(
        "senescence",
        "Natural aging of plants leads to yellowing, drying, and shedding of leaves.",
        "Prune old parts and provide proper nutrients.",
        "Maintain healthy growing conditions to delay aging.",
    ),
    record(
        "light excess",
        "Overexposure to sunlight causes leaf scorch, discoloration, or drying.",
        "Provide shade or relocate the plant.",
        "Match plants to their appropriate light requirements.",
    ),
    record(
        "sooty mold",
        "A black, sooty coating develops on leaves due to fungal growth on insect secretions.",
        "Wash leaves with soapy water and control pests.",
        "Prevent sap-sucking pests like aphids or whiteflies.",
    ),
    record(
        "leaf miners",
        "Small larvae create winding trails inside leaves, causing aesthetic damage and reduced photosynthesis.",
        "Remove affected leaves and use neem oil.",
        "Use sticky traps and introduce parasitic wasps.",
    ),
    record(
        "bacteria",
        "Bacterial infections cause spots, wilting, or ooze on plant surfaces.",
        "Use copper-based bactericides and remove infected parts.",
        "Avoid overhead watering and use disease-resistant varieties.",
    ),
    record(
        "sap-sucking pests",
        "Pests like aphids and whiteflies suck plant sap, causing yellowing, stunting, and mold growth.",
        "Spray with insecticidal soap or neem oil.",
        "Encourage natural predators and keep plants healthy.",
    ),
    record(
        "bacterial leaf spot",
        "Water-soaked spots on leaves that eventually turn brown or black, often caused by bacteria.",
        "Remove infected leaves and use copper-based sprays.",
        "Water plants at the base and avoid overcrowding.",
    ),
    record(
        "low temperatures and frost damage",
        "Frost causes leaf discoloration, wilting, and tissue death in sensitive plants.",
        "Prune damaged parts and provide warmth.",
        "Cover plants during cold spells or move them indoors if possible.",
    ),
];

lazy_static::lazy_static! {
    static ref INDEX: HashMap<&'static str, &'static DiseaseRecord> =
        DISEASES.iter().map(|r| (r.name, r)).collect();
}

/// 病害カタログ
///
/// ラベルの照合は小文字化してから完全一致で行う
#[derive(Debug, Clone, Copy, Default)]
pub struct DiseaseCatalog;

impl DiseaseCatalog {
    /// ラベルに対応するレコードを取得（見つからなければNone）
    pub fn lookup(label: &str) -> Option<&'static DiseaseRecord> {
        INDEX.get(label.to_lowercase().as_str()).copied()
    }

    /// 全レコードを表示順で返す
    pub fn records() -> &'static [DiseaseRecord] {
        &DISEASES
    }

    /// レコード件数
    pub fn len() -> usize {
        INDEX.len()
    }
}
