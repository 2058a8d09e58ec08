//! Canned roadmap and weekly templates for recognized goal domains
//!
//! Matching is ordered: the first rule whose keywords match wins, so
//! table order encodes priority and must be preserved.

use crate::domain::{DailyTaskSpec, MonthlyPlanEntry, TaskItem};

/// A duration-estimation rule: months = max(floor, ceil(base - hours / divisor))
pub struct DurationRule {
    /// Case-insensitive substrings that select this rule
    pub keywords: &'static [&'static str],
    /// Lower bound on the estimate
    pub floor: u32,
    /// Base months before adjusting for available hours
    pub base: f64,
    /// Hours divisor: more daily hours shortens the plan
    pub divisor: f64,
}

/// Ordered estimation rules, first match wins
pub const DURATION_RULES: &[DurationRule] = &[
    DurationRule {
        keywords: &["web dev", "frontend", "backend"],
        floor: 3,
        base: 6.0,
        divisor: 2.0,
    },
    DurationRule {
        keywords: &["language", "spanish", "french"],
        floor: 6,
        base: 12.0,
        divisor: 1.0,
    },
    DurationRule {
        keywords: &["data science", "machine learning"],
        floor: 4,
        base: 8.0,
        divisor: 1.5,
    },
    DurationRule {
        keywords: &["marketing", "digital marketing"],
        floor: 2,
        base: 4.0,
        divisor: 3.0,
    },
];

/// Fallback rule for goals no keyword matches
pub const DEFAULT_DURATION_RULE: DurationRule = DurationRule {
    keywords: &[],
    floor: 3,
    base: 6.0,
    divisor: 2.0,
};

/// A roadmap template: keywords plus a builder for the canned entries
pub struct RoadmapTemplate {
    pub keywords: &'static [&'static str],
    pub build: fn() -> Vec<MonthlyPlanEntry>,
}

/// Ordered roadmap templates, first match wins
pub const ROADMAP_TEMPLATES: &[RoadmapTemplate] = &[
    RoadmapTemplate {
        keywords: &["web dev", "frontend"],
        build: web_dev_roadmap,
    },
    RoadmapTemplate {
        keywords: &["language", "spanish"],
        build: language_roadmap,
    },
];

/// A weekly task template: keywords plus a builder for the 7-day list
pub struct WeekTemplate {
    pub keywords: &'static [&'static str],
    pub build: fn() -> Vec<DailyTaskSpec>,
}

/// Ordered weekly templates, first match wins
pub const WEEK_TEMPLATES: &[WeekTemplate] = &[WeekTemplate {
    keywords: &["web dev", "frontend"],
    build: web_dev_week,
}];

/// Check whether any keyword occurs in the lowercased goal
pub fn matches(goal_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| goal_lower.contains(kw))
}

fn entry(month: u32, goal: &str, milestones: [&str; 4]) -> MonthlyPlanEntry {
    MonthlyPlanEntry {
        month,
        goal: goal.to_string(),
        milestones: milestones.iter().map(|m| m.to_string()).collect(),
    }
}

fn web_dev_roadmap() -> Vec<MonthlyPlanEntry> {
    vec![
        entry(
            1,
            "HTML & CSS Fundamentals",
            [
                "Complete HTML structure and semantics",
                "Master CSS layout and styling",
                "Build 3 responsive web pages",
                "Understand Flexbox and Grid",
            ],
        ),
        entry(
            2,
            "JavaScript Essentials",
            [
                "Learn JavaScript syntax and basics",
                "Understand DOM manipulation",
                "Master events and functions",
                "Build interactive web components",
            ],
        ),
        entry(
            3,
            "React & Modern Development",
            [
                "Learn React components and JSX",
                "Understand state management",
                "Build a complete React application",
                "Deploy your portfolio online",
            ],
        ),
    ]
}

fn language_roadmap() -> Vec<MonthlyPlanEntry> {
    vec![
        entry(
            1,
            "Basic Vocabulary & Grammar",
            [
                "Learn 500 essential words",
                "Master present tense conjugations",
                "Practice basic conversations",
                "Understand sentence structure",
            ],
        ),
        entry(
            2,
            "Intermediate Communication",
            [
                "Expand vocabulary to 1000 words",
                "Learn past and future tenses",
                "Practice daily conversations",
                "Understand common phrases",
            ],
        ),
        entry(
            3,
            "Advanced Fluency",
            [
                "Master complex grammar rules",
                "Engage in fluent conversations",
                "Read and write short stories",
                "Pass intermediate proficiency test",
            ],
        ),
    ]
}

fn day(label: &str, titles: [&str; 4]) -> DailyTaskSpec {
    DailyTaskSpec {
        day: label.to_string(),
        tasks: titles
            .iter()
            .map(|title| TaskItem {
                title: title.to_string(),
                duration: 25,
            })
            .collect(),
    }
}

fn web_dev_week() -> Vec<DailyTaskSpec> {
    vec![
        day(
            "Day 1",
            [
                "Watch HTML Crash Course",
                "Practice HTML Structure",
                "Build Your First Web Page",
                "Review and Take Notes",
            ],
        ),
        day(
            "Day 2",
            [
                "CSS Basics and Selectors",
                "Style Your HTML Page",
                "Learn CSS Box Model",
                "Practice CSS Layouts",
            ],
        ),
        day(
            "Day 3",
            [
                "Advanced CSS Properties",
                "Build Responsive Layout",
                "CSS Flexbox Tutorial",
                "Create Navigation Menu",
            ],
        ),
        day(
            "Day 4",
            [
                "CSS Grid Layout System",
                "Build Grid-based Page",
                "Responsive Design Principles",
                "Mobile-First Approach",
            ],
        ),
        day(
            "Day 5",
            [
                "CSS Animations and Transitions",
                "Create Interactive Elements",
                "Project: Portfolio Website",
                "Code Review and Optimization",
            ],
        ),
        day(
            "Day 6",
            [
                "JavaScript Introduction",
                "Variables and Data Types",
                "Functions and Scope",
                "Practice JavaScript Basics",
            ],
        ),
        day(
            "Day 7",
            [
                "DOM Manipulation Basics",
                "Event Handling",
                "Interactive Web Elements",
                "Week Review and Planning",
            ],
        ),
    ]
}
