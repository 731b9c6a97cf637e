//! Prompt assembly for the two generation flows

use crate::request::ChatMessage;
use crate::error::Error;

pub const NO_API_DETAILS: &str
  = "No valid API details to generate test cases.";
pub const NO_USER_STORY: &str
  = "No valid User Story details to generate test cases.";
pub const NO_ACCEPTANCE_CRITERIA: &str
  = "No valid Acceptance Criteria is provided";
pub const NO_MODEL_NAME: &str
  = "No valid Model Name is provided";

const API_TEST_USER_PREFIX: &str
  = "Generate REST API test cases using Rest Assured (Java, TestNG) \
     for the following API specification:\n";

const USER_STORY_SYSTEM_LINES: [&str; 9] = [
  "You are a helpful manual testing assistant that generates test cases for the given user story.",
  "Create test cases ensuring the following criteria are met:",
  "- [MANDATORY] The test case structure must include: Test Case ID, Title, Expected Results.",
  "- [MANDATORY] Cover all acceptance criteria mentioned.",
  "- [MANDATORY] Include all positive, negative, and edge cases.",
  "- Categorize test cases separately into Functional, Performance, and Security test cases.",
  "- Cover all business scenarios mentioned in the user story.",
  "- [MANDATORY] Output should be in a file in csv format",
  "- All test types (Functional, Performance, Security) should be separted in csv file.",
];

fn api_test_system_content(instruction_line: &str) -> String
{   let mut content = String::new();
    content.push_str(
      "You are a helpful assistant that generates Java code for API tests. \
       Your response must contain only Java code enclosed in a single code \
       block using triple backticks (```java ... ```). \
       - Do not include any additional text explanations. \
       - Be a complete and executable Java class. \
       - Use only standard and correct imports \
       (e.g., org.testng.Assert, io.restassured.RestAssured). "
    );
    content.push_str("- ");
    content.push_str(instruction_line);
    content.push('\n');
    content.push_str(
      "- Add package as automation.tests \
       - Write comments on the code \
       - Print output of the API response \
       - Generate Java code that is compatible with Java 8 version ONLY \
       - Use BeforeMethod of Testng with hardcoded baseURI \
       - DO NOT add any assertion other than status code \
       - DO NOT use Arrays.stream method in the generated code \
       - The generated code should use only the Java methods belonging \
       to RestAssured and TestNG compatible versions \
       - If you parse JSON (e.g., new ObjectMapper().readTree(...)), \
       handle or declare any exceptions (throws Exception or try/catch)."
    );
    content
}

/// System + user messages asking for a Rest Assured test class.
pub fn build_api_test_prompt(
  subject: &str
, instruction_line: &str
) -> Result<Vec<ChatMessage>, Error>
{   if subject.is_empty()
    {   return Err(Error::Validation(NO_API_DETAILS.to_string()));
    }
    Ok(vec![
      ChatMessage::system(api_test_system_content(instruction_line)),
      ChatMessage::user(format!("{}{}", API_TEST_USER_PREFIX, subject)),
    ])
}

/// System + user messages asking for CSV test cases.
///
/// Story is checked before acceptance criteria.
pub fn build_user_story_prompt(
  story: &str
, acceptance_criteria: &str
) -> Result<Vec<ChatMessage>, Error>
{   if story.is_empty()
    {   return Err(Error::Validation(NO_USER_STORY.to_string()));
    }
    if acceptance_criteria.is_empty()
    {   return Err(Error::Validation(
          NO_ACCEPTANCE_CRITERIA.to_string()
        ));
    }
    let user = format!(
      "Generate test cases for the following User Story : \n{} \
       with acceptance criteria: {}",
      story, acceptance_criteria
    );
    Ok(vec![
      ChatMessage::system(USER_STORY_SYSTEM_LINES.join("\n")),
      ChatMessage::user(user),
    ])
}
