/// C++ vocabulary shipped with the crate. One versioned document holds both
/// the token lists and the per-category selection priorities so the two can
/// never drift apart. Alternate vocabularies can be loaded from disk via
/// `CODEBLANKS_VOCABULARY_PATH`.
pub const CPP_VOCABULARY_JSON: &str = r##"{
  "version": 1,
  "language": "cpp",
  "categories": [
    {
      "name": "control",
      "priority": 10,
      "tokens": ["if", "else", "for", "while", "do", "switch", "case", "break", "continue", "return"]
    },
    {
      "name": "types",
      "priority": 9,
      "tokens": ["int", "float", "double", "char", "bool", "void", "string", "auto", "long", "short"]
    },
    {
      "name": "container",
      "priority": 8,
      "tokens": ["vector", "map", "set", "list", "queue", "stack", "array", "deque", "pair"]
    },
    {
      "name": "method",
      "priority": 7,
      "tokens": ["push_back", "pop_back", "push", "pop", "insert", "erase", "clear", "size", "empty", "front", "back"]
    },
    {
      "name": "stream",
      "priority": 6,
      "tokens": ["cout", "cin", "endl", "cerr", "getline"]
    },
    {
      "name": "keyword",
      "priority": 5,
      "tokens": ["namespace", "using", "class", "struct", "public", "private", "protected", "const", "static"]
    },
    {
      "name": "include",
      "priority": 4,
      "tokens": ["#include", "iostream", "vector", "string", "algorithm", "cmath"]
    },
    {
      "name": "operator",
      "priority": 2,
      "tokens": ["++", "--", "==", "!=", "<=", ">=", "&&", "||", "<<", ">>"]
    },
    {
      "name": "symbol",
      "priority": 1,
      "tokens": ["{", "}", "(", ")", ";", ",", "[", "]"]
    }
  ]
}"##;
