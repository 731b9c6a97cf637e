//! Maps requested test types to the instruction line given to the model

use log::debug;

/// Kinds of test the model can be asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestType
{   Positive
  , Negative
  , Edge
}

impl TestType
{   /// Case-insensitive parse; unknown labels yield `None`
    pub fn parse(label: &str) -> Option<Self>
    {   match label.to_ascii_lowercase().as_str()
        {   "positive" => Some(TestType::Positive)
          , "negative" => Some(TestType::Negative)
          , "edge" => Some(TestType::Edge)
          , _ => None
        }
    }

    pub fn label(&self) -> &'static str
    {   match self
        {   TestType::Positive => "Positive"
          , TestType::Negative => "Negative"
          , TestType::Edge => "Edge"
        }
    }
}

fn only(test_type: TestType) -> String
{   format!("Include Only {} tests", test_type.label())
}

/// Build the instruction line for the requested test types.
///
/// Unknown labels are ignored; when nothing recognizable is left the
/// line asks for positive tests only.
pub fn select_instruction_line<S: AsRef<str>>(types: &[S]) -> String
{   let line = match types
    {   [] => only(TestType::Positive)
      , [single] => {
          only(
            TestType::parse(single.as_ref())
              .unwrap_or(TestType::Positive)
          )
        }
      , many => {
          let mut seen: Vec<TestType> = Vec::new();
          for t in many.iter().filter_map(|t| TestType::parse(t.as_ref()))
          {   if !seen.contains(&t)
              {   seen.push(t);
              }
          }
          match seen.as_slice()
          {   [] => only(TestType::Positive)
            , [one] => only(*one)
            , _ => {
                let joined = seen
                  .iter()
                  .map(TestType::label)
                  .collect::<Vec<_>>()
                  .join(" and ");
                format!("Include {} tests", joined)
              }
          }
        }
    };
    debug!("Selected test type line: {}", line);
    line
}
