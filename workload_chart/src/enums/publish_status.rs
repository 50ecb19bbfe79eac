use crate::common::*;

#[doc = "Outcome of one publish attempt on the destination page"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStatus {
    Replaced,
    Unchanged,
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishStatus::Replaced => write!(f, "Replaced"),
            PublishStatus::Unchanged => write!(f, "No replacement"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_match_invoker_contract() {
        assert_eq!(PublishStatus::Replaced.to_string(), "Replaced");
        assert_eq!(PublishStatus::Unchanged.to_string(), "No replacement");
    }
}
