use crate::common::*;

#[doc = r#"
    How a task's effort is laid onto the day grid.

    * `Spread`    - hours spread evenly between a start and an end date
    * `SingleDay` - points placed entirely on one date
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EffortMode {
    #[default]
    Spread,
    SingleDay,
}
