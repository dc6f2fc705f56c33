#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use crate::{
        services::{target_selector::ScoringPolicy, QuestionService},
        tables::{DistractorTable, VocabularyTable},
    };

    pub const FOR_LOOP_CODE: &str = "#include <iostream>\nusing namespace std;\nint main(){\n   for(int i = 0; i < 5; i++){\n      cout << i << endl;\n   }\n   return 0;\n}";

    pub const VECTOR_OPS_CODE: &str = "#include <iostream>\n#include <vector>\nusing namespace std;\nint main(){\n   vector<int> v;\n   v.push_back(10);\n   v.push_back(20);\n   cout << v.size() << endl;\n   return 0;\n}";

    pub const WHILE_LOOP_CODE: &str = "#include <iostream>\nusing namespace std;\nint main(){\n   int count = 0;\n   while(count < 3){\n      cout << count << endl;\n      count++;\n   }\n   return 0;\n}";

    /// A service wired with the builtin tables and a fixed seed.
    pub fn test_service() -> QuestionService {
        QuestionService::new(
            Arc::new(VocabularyTable::builtin()),
            Arc::new(DistractorTable::builtin()),
            ScoringPolicy::default(),
            false,
            Some(42),
        )
        .expect("builtin tables produce a valid service")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::dto::GenerateQuestionRequest;

    #[test]
    fn test_fixture_codes_are_nonempty() {
        assert!(FOR_LOOP_CODE.contains("for("));
        assert!(VECTOR_OPS_CODE.contains("push_back"));
        assert!(WHILE_LOOP_CODE.contains("while("));
    }

    #[test]
    fn test_fixture_service_generates() {
        let service = test_service();
        let question = service
            .generate(&GenerateQuestionRequest::new(FOR_LOOP_CODE, 3))
            .unwrap();
        assert_eq!(question.sub_questions.len(), 3);
    }
}
