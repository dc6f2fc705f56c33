/// Pre-written code snippets keyed by topic id. The template code source picks
/// one at random per request, so question generation needs no model call at
/// all. Topic ids follow the curriculum's level/lesson scheme (L2_01 = level 2,
/// lesson 1).
pub const CODE_TEMPLATES_JSON: &str = r##"{
  "version": 1,
  "topics": {
    "L1_01": [
      "#include <iostream>\nusing namespace std;\nint main(){\n   cout << \"Hello World\" << endl;\n   return 0;\n}",
      "#include <iostream>\nusing namespace std;\nint main(){\n   cout << \"Welcome to C++\" << endl;\n   return 0;\n}",
      "#include <iostream>\nusing namespace std;\nint main(){\n   cout << \"My first program\" << endl;\n   return 0;\n}"
    ],
    "L1_03": [
      "#include <iostream>\nusing namespace std;\nint main(){\n   int age = 25;\n   cout << \"Age: \" << age << endl;\n   return 0;\n}",
      "#include <iostream>\nusing namespace std;\nint main(){\n   int score = 100;\n   cout << \"Score: \" << score << endl;\n   return 0;\n}"
    ],
    "L1_04": [
      "#include <iostream>\nusing namespace std;\nint main(){\n   int a = 10;\n   int b = 5;\n   int sum = a + b;\n   cout << \"Sum: \" << sum << endl;\n   return 0;\n}",
      "#include <iostream>\nusing namespace std;\nint main(){\n   int x = 20;\n   int y = 4;\n   int result = x * y;\n   cout << \"Result: \" << result << endl;\n   return 0;\n}"
    ],
    "L2_01": [
      "#include <iostream>\nusing namespace std;\nint main(){\n   int num = 10;\n   if(num > 0){\n      cout << \"Positive\" << endl;\n   }\n   return 0;\n}",
      "#include <iostream>\nusing namespace std;\nint main(){\n   int age = 20;\n   if(age >= 18){\n      cout << \"Adult\" << endl;\n   }\n   return 0;\n}"
    ],
    "L2_02": [
      "#include <iostream>\nusing namespace std;\nint main(){\n   int num = 7;\n   if(num % 2 == 0){\n      cout << \"Even\" << endl;\n   } else {\n      cout << \"Odd\" << endl;\n   }\n   return 0;\n}"
    ],
    "L2_03": [
      "#include <iostream>\nusing namespace std;\nint main(){\n   for(int i = 0; i < 5; i++){\n      cout << i << endl;\n   }\n   return 0;\n}",
      "#include <iostream>\nusing namespace std;\nint main(){\n   for(int i = 1; i <= 3; i++){\n      cout << \"Step \" << i << endl;\n   }\n   return 0;\n}"
    ],
    "L2_04": [
      "#include <iostream>\nusing namespace std;\nint main(){\n   int count = 0;\n   while(count < 3){\n      cout << count << endl;\n      count++;\n   }\n   return 0;\n}"
    ],
    "L3_01": [
      "#include <iostream>\n#include <vector>\nusing namespace std;\nint main(){\n   vector<int> v;\n   v.push_back(10);\n   v.push_back(20);\n   cout << v.size() << endl;\n   return 0;\n}",
      "#include <iostream>\n#include <vector>\nusing namespace std;\nint main(){\n   vector<int> nums;\n   nums.push_back(1);\n   nums.push_back(2);\n   nums.push_back(3);\n   cout << nums.front() << endl;\n   return 0;\n}"
    ]
  }
}"##;
