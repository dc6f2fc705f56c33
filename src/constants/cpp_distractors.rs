/// Hand-authored wrong-answer alternatives keyed by exact target text.
/// Each entry lists plausible-but-incorrect options; none may equal its key.
pub const CPP_DISTRACTORS_JSON: &str = r##"{
  "version": 1,
  "entries": {
    "for": ["while", "do", "if"],
    "while": ["for", "do", "if"],
    "if": ["while", "for", "switch"],
    "else": ["elif", "otherwise", "then"],
    "switch": ["if", "select", "case"],
    "return": ["exit", "yield", "break"],

    "int": ["float", "double", "char"],
    "float": ["double", "int", "long"],
    "double": ["float", "long", "decimal"],
    "char": ["int", "string", "byte"],
    "bool": ["int", "boolean", "flag"],
    "void": ["int", "null", "none"],
    "string": ["char", "text", "str"],
    "auto": ["var", "type", "dynamic"],

    "vector": ["array", "list", "deque"],
    "map": ["dict", "hashmap", "table"],
    "set": ["list", "array", "collection"],
    "list": ["vector", "array", "deque"],
    "queue": ["stack", "list", "deque"],
    "stack": ["queue", "list", "array"],

    "push_back": ["insert", "add", "append"],
    "pop_back": ["remove", "delete", "pop"],
    "push": ["add", "insert", "append"],
    "pop": ["remove", "delete", "pop_back"],
    "insert": ["add", "push", "append"],
    "erase": ["remove", "delete", "clear"],
    "size": ["length", "count", "capacity"],
    "empty": ["isEmpty", "null", "zero"],

    "cout": ["cin", "print", "output"],
    "cin": ["cout", "input", "scanf"],
    "endl": ["newline", "\\n", "end"],
    "cerr": ["cout", "error", "stderr"],

    "namespace": ["package", "module", "scope"],
    "using": ["import", "include", "require"],
    "class": ["struct", "type", "object"],
    "public": ["private", "protected", "visible"],
    "const": ["final", "readonly", "static"],

    "#include": ["#import", "#using", "import"],
    "iostream": ["stdio", "stream", "io"],

    "++": ["--", "+=", "+1"],
    "--": ["++", "-=", "-1"],
    "<<": [">>", "<", "<<<"],
    ">>": ["<<", ">", ">>>"],
    "==": ["!=", "=", "==="],
    "!=": ["==", "<>", "!=="]
  }
}"##;
