#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::Question;

    /// Five questions over Science (1) and Art (2), ids 1..=5.
    pub fn sample_questions() -> Vec<Question> {
        vec![
            Question::test_question(1, 1, "Speed of light?"),
            Question::test_question(2, 2, "Who painted the Mona Lisa?"),
            Question::test_question(3, 2, "Which artist cut off an ear?"),
            Question::test_question(4, 1, "Boiling point of water?"),
            Question::test_question(5, 2, "Who sculpted David?"),
        ]
    }

    /// `n` questions with ids 1..=n alternating between categories 2 and 1.
    pub fn numbered_questions(n: i64) -> Vec<Question> {
        (1..=n)
            .map(|id| Question::test_question(id, 1 + id % 2, &format!("Question {}", id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_sample_questions_are_ordered_by_id() {
        let questions = sample_questions();
        assert!(questions.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_numbered_questions_alternate_categories() {
        let questions = numbered_questions(4);
        let categories: Vec<i64> = questions.iter().map(|q| q.category).collect();
        assert_eq!(categories, vec![2, 1, 2, 1]);
    }
}
