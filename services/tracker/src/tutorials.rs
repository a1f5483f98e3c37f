//! The built-in exercise tutorial catalog.

use std::sync::OnceLock;

use fittrack_id::TutorialId;
use serde::{Deserialize, Serialize};

/// Exercise category a tutorial belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "squats")]
    Squats,
    #[serde(rename = "pushups")]
    Pushups,
    #[serde(rename = "biceps")]
    Biceps,
}

impl Category {
    /// Parses the category slug used in query strings.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "squats" => Some(Category::Squats),
            "pushups" => Some(Category::Pushups),
            "biceps" => Some(Category::Biceps),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Category::Squats => "squats",
            Category::Pushups => "pushups",
            Category::Biceps => "biceps",
        };
        write!(f, "{}", s)
    }
}

/// Difficulty rating shown alongside a tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// One entry in the tutorial catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Tutorial {
    pub id: TutorialId,
    pub title: &'static str,
    pub description: &'static str,
    /// Formatted running time ("4:30").
    pub duration: &'static str,
    pub level: Difficulty,
    pub category: Category,
    pub video_url: &'static str,
}

/// The full catalog, in display order.
pub fn catalog() -> &'static [Tutorial] {
    static CATALOG: OnceLock<Vec<Tutorial>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog).as_slice()
}

/// Catalog entries for one category, in display order.
pub fn by_category(category: Category) -> Vec<&'static Tutorial> {
    catalog().iter().filter(|t| t.category == category).collect()
}

fn build_catalog() -> Vec<Tutorial> {
    let entry = |id: &str,
                 title,
                 description,
                 duration,
                 level,
                 category,
                 video_url| Tutorial {
        id: id.parse().expect("static tutorial ID"),
        title,
        description,
        duration,
        level,
        category,
        video_url,
    };

    vec![
        entry(
            "tut_01ARZ3NDEKTSV4RRFFQ69G5FA1",
            "Perfect Squat Form",
            "Learn the proper technique for squats to maximize results and prevent injury.",
            "4:30",
            Difficulty::Beginner,
            Category::Squats,
            "https://www.youtube.com/embed/byxWus7BwfQ",
        ),
        entry(
            "tut_01ARZ3NDEKTSV4RRFFQ69G5FA2",
            "Advanced Squat Variations",
            "Take your squat routine to the next level with these challenging variations.",
            "6:15",
            Difficulty::Advanced,
            Category::Squats,
            "https://www.youtube.com/embed/BUon1aVFC5Q",
        ),
        entry(
            "tut_01ARZ3NDEKTSV4RRFFQ69G5FA3",
            "Push-up Fundamentals",
            "Master the basics of the perfect push-up for chest and arm strength.",
            "5:45",
            Difficulty::Beginner,
            Category::Pushups,
            "https://www.youtube.com/embed/OUOlDkBJ30E",
        ),
        entry(
            "tut_01ARZ3NDEKTSV4RRFFQ69G5FA4",
            "Push-up Variations for Strength",
            "Different push-up styles to target various muscle groups.",
            "7:20",
            Difficulty::Intermediate,
            Category::Pushups,
            "https://www.youtube.com/embed/oqBiZ_YV1ps",
        ),
        entry(
            "tut_01ARZ3NDEKTSV4RRFFQ69G5FA5",
            "Bicep Curl Technique",
            "Proper form and technique for effective bicep curls.",
            "3:50",
            Difficulty::Beginner,
            Category::Biceps,
            "https://www.youtube.com/embed/XE_pHwbst04",
        ),
        entry(
            "tut_01ARZ3NDEKTSV4RRFFQ69G5FA6",
            "Advanced Bicep Training",
            "Comprehensive bicep workout for maximum muscle growth.",
            "8:10",
            Difficulty::Advanced,
            Category::Biceps,
            "https://www.youtube.com/embed/4FyTk4Jhkeg",
        ),
    ]
}
