//! 微生物カタログ
//!
//! 実行時には変更されない固定リスト。`name` が唯一の識別子で、
//! アップロード画像ストアのキーとしても使われる。

/// 微生物レコード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Organism {
    pub name: &'static str,
    /// プレースホルダ画像のURL
    pub image: &'static str,
    pub description: &'static str,
    pub habitat: &'static str,
    pub size: &'static str,
    pub fun_fact: &'static str,
}

/// 表示順に並んだカタログ
pub static CATALOG: [Organism; 10] = [
    Organism {
        name: "Amoeba",
        image: "https://via.placeholder.com/300x200?text=Amoeba",
        description: "Single-celled organism known for its ability to change shape.",
        habitat: "Freshwater",
        size: "250-750 µm",
        fun_fact: "Some species of amoeba can form a protective cyst when conditions are unfavorable.",
    },
    Organism {
        name: "Paramecium",
        image: "https://via.placeholder.com/300x200?text=Paramecium",
        description: "Ciliate protozoan with a distinctive slipper-like shape.",
        habitat: "Freshwater ponds and rivers",
        size: "50-350 µm",
        fun_fact: "Paramecia have a unique contractile vacuole that acts like a pump to expel excess water.",
    },
    Organism {
        name: "Euglena",
        image: "https://via.placeholder.com/300x200?text=Euglena",
        description: "Flagellate eukaryote with both plant-like and animal-like characteristics.",
        habitat: "Freshwater and moist soil",
        size: "15-500 µm",
        fun_fact: "Euglena have a light-sensitive eyespot that helps them detect and move towards light for photosynthesis.",
    },
    Organism {
        name: "Volvox",
        image: "https://via.placeholder.com/300x200?text=Volvox",
        description: "Colonial algae that form hollow spherical colonies.",
        habitat: "Freshwater ponds and ditches",
        size: "500 µm - 1.5 mm",
        fun_fact: "Volvox colonies rotate as they move through water, resembling tiny green rolling balls.",
    },
    Organism {
        name: "Stentor",
        image: "https://via.placeholder.com/300x200?text=Stentor",
        description: "Large, trumpet-shaped ciliate protozoans known for their ability to change shape.",
        habitat: "Freshwater ponds and lakes",
        size: "500 µm - 2 mm",
        fun_fact: "Stentors can regenerate into a complete organism from just a small piece of themselves.",
    },
    Organism {
        name: "Diatom",
        image: "https://via.placeholder.com/300x200?text=Diatom",
        description: "Unicellular algae with cell walls made of silica.",
        habitat: "Aquatic environments, both freshwater and marine",
        size: "2 µm - 2 mm",
        fun_fact: "Diatoms are responsible for producing about 20% of the world's oxygen through photosynthesis.",
    },
    Organism {
        name: "Vorticella",
        image: "https://via.placeholder.com/300x200?text=Vorticella",
        description: "Bell-shaped ciliate protozoan attached to substrates by a long stalk.",
        habitat: "Freshwater ponds and streams",
        size: "30-100 µm",
        fun_fact: "Vorticella can contract its stalk into a spring-like coil in just 4 milliseconds.",
    },
    Organism {
        name: "Rotifer",
        image: "https://via.placeholder.com/300x200?text=Rotifer",
        description: "Microscopic animals with a corona of cilia used for locomotion and feeding.",
        habitat: "Freshwater environments",
        size: "50-2000 µm",
        fun_fact: "Some rotifers can survive extreme dehydration and remain dormant for years.",
    },
    Organism {
        name: "Tardigrade",
        image: "https://via.placeholder.com/300x200?text=Tardigrade",
        description: "Microscopic animals known for their extreme resilience.",
        habitat: "Various environments, including freshwater and terrestrial moss",
        size: "300-500 µm",
        fun_fact: "Tardigrades can survive extreme conditions, including the vacuum of space.",
    },
    Organism {
        name: "Hydra",
        image: "https://via.placeholder.com/300x200?text=Hydra",
        description: "Small, fresh-water organisms with a tubular body and tentacles.",
        habitat: "Freshwater ponds and lakes",
        size: "1-20 mm",
        fun_fact: "Hydra are known for their regenerative abilities and potential biological immortality.",
    },
];

/// カタログ件数（進捗率の分母）
pub fn total() -> usize {
    CATALOG.len()
}

/// 名前で完全一致検索
pub fn find(name: &str) -> Option<&'static Organism> {
    CATALOG.iter().find(|o| o.name == name)
}

/// 大文字小文字を無視して検索（CLI入力用）
pub fn find_ignore_case(name: &str) -> Option<&'static Organism> {
    CATALOG.iter().find(|o| o.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_ten_organisms() {
        assert_eq!(total(), 10);
        assert_eq!(CATALOG[0].name, "Amoeba");
        assert_eq!(CATALOG[9].name, "Hydra");
    }

    #[test]
    fn test_names_are_unique_and_non_empty() {
        let names: HashSet<&str> = CATALOG.iter().map(|o| o.name).collect();
        assert_eq!(names.len(), CATALOG.len());
        assert!(CATALOG.iter().all(|o| !o.name.is_empty()));
    }

    #[test]
    fn test_placeholder_matches_name() {
        for organism in CATALOG.iter() {
            assert!(organism.image.ends_with(&format!("text={}", organism.name)));
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("Tardigrade").map(|o| o.size), Some("300-500 µm"));
        assert!(find("tardigrade").is_none());
        assert!(find("Plankton").is_none());
    }

    #[test]
    fn test_find_ignore_case() {
        assert_eq!(find_ignore_case("  volvox ").map(|o| o.name), Some("Volvox"));
        assert!(find_ignore_case("").is_none());
    }
}
