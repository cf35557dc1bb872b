//! Fixed text pools used when planning people and reviews.

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty", "Mark",
    "Margaret", "Steven", "Sandra", "Andrew", "Ashley", "Joshua", "Emily", "Kevin", "Donna",
    "Brian", "Michelle", "Priya", "Wei", "Amara", "Mateo", "Yuki", "Omar", "Ingrid", "Kofi",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Nguyen", "Patel", "Okafor", "Tanaka", "Larsen", "Mensah",
];

const FEEDBACK_EXCEPTIONAL: &[&str] = &[
    "Exceptional quarter. Consistently exceeds expectations and raises the bar for the team.",
    "Outstanding results across every goal; a clear role model for colleagues.",
];

const FEEDBACK_STRONG: &[&str] = &[
    "Strong performance with reliable delivery. Keep growing ownership of larger initiatives.",
    "Solid contributor who communicates well and supports teammates.",
];

const FEEDBACK_MEETS: &[&str] = &[
    "Meets expectations. Focus on sharpening technical depth next quarter.",
    "Steady progress on goals; more proactive communication would help.",
];

const FEEDBACK_DEVELOPING: &[&str] = &[
    "Below expectations this quarter. Agreed on a development plan with clear milestones.",
    "Needs improvement in goal delivery and collaboration; follow-up scheduled.",
];

/// Feedback lines matching an overall rating.
pub fn feedback_pool(overall_rating: f64) -> &'static [&'static str] {
    if overall_rating >= 4.5 {
        FEEDBACK_EXCEPTIONAL
    } else if overall_rating >= 3.5 {
        FEEDBACK_STRONG
    } else if overall_rating >= 2.5 {
        FEEDBACK_MEETS
    } else {
        FEEDBACK_DEVELOPING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_band_has_feedback() {
        for rating in [1.0, 2.5, 3.75, 5.0] {
            assert!(!feedback_pool(rating).is_empty());
        }
        assert_ne!(feedback_pool(5.0), feedback_pool(1.0));
    }
}
