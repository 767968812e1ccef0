use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Target race distance or fitness objective; drives plan duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
pub enum RunningGoal {
    #[serde(rename = "5k")]
    FiveK,
    #[serde(rename = "10k")]
    TenK,
    #[serde(rename = "half_marathon")]
    HalfMarathon,
    #[serde(rename = "marathon")]
    Marathon,
    #[serde(rename = "custom")]
    Custom,
}

impl RunningGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunningGoal::FiveK => "5k",
            RunningGoal::TenK => "10k",
            RunningGoal::HalfMarathon => "half_marathon",
            RunningGoal::Marathon => "marathon",
            RunningGoal::Custom => "custom",
        }
    }
}

impl FromSql<Text, Pg> for RunningGoal {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "5k" => Ok(RunningGoal::FiveK),
            "10k" => Ok(RunningGoal::TenK),
            "half_marathon" => Ok(RunningGoal::HalfMarathon),
            "marathon" => Ok(RunningGoal::Marathon),
            "custom" => Ok(RunningGoal::Custom),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for RunningGoal {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            RunningGoal::FiveK => out.write_all(b"5k")?,
            RunningGoal::TenK => out.write_all(b"10k")?,
            RunningGoal::HalfMarathon => out.write_all(b"half_marathon")?,
            RunningGoal::Marathon => out.write_all(b"marathon")?,
            RunningGoal::Custom => out.write_all(b"custom")?,
        }
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    EasyRun,
    LongRun,
    Tempo,
    Intervals,
    Recovery,
    Rest,
}

impl FromSql<Text, Pg> for WorkoutType {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "easy_run" => Ok(WorkoutType::EasyRun),
            "long_run" => Ok(WorkoutType::LongRun),
            "tempo" => Ok(WorkoutType::Tempo),
            "intervals" => Ok(WorkoutType::Intervals),
            "recovery" => Ok(WorkoutType::Recovery),
            "rest" => Ok(WorkoutType::Rest),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for WorkoutType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            WorkoutType::EasyRun => out.write_all(b"easy_run")?,
            WorkoutType::LongRun => out.write_all(b"long_run")?,
            WorkoutType::Tempo => out.write_all(b"tempo")?,
            WorkoutType::Intervals => out.write_all(b"intervals")?,
            WorkoutType::Recovery => out.write_all(b"recovery")?,
            WorkoutType::Rest => out.write_all(b"rest")?,
        }
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum EffortLevel {
    Easy,
    Moderate,
    Hard,
    VeryHard,
}

impl FromSql<Text, Pg> for EffortLevel {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "easy" => Ok(EffortLevel::Easy),
            "moderate" => Ok(EffortLevel::Moderate),
            "hard" => Ok(EffortLevel::Hard),
            "very_hard" => Ok(EffortLevel::VeryHard),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for EffortLevel {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            EffortLevel::Easy => out.write_all(b"easy")?,
            EffortLevel::Moderate => out.write_all(b"moderate")?,
            EffortLevel::Hard => out.write_all(b"hard")?,
            EffortLevel::VeryHard => out.write_all(b"very_hard")?,
        }
        Ok(IsNull::No)
    }
}

/// Display unit for a plan's distances, fixed when the plan is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Km,
    Mi,
}

impl DistanceUnit {
    pub fn label(&self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Mi => "mi",
        }
    }
}

impl FromSql<Text, Pg> for DistanceUnit {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "km" => Ok(DistanceUnit::Km),
            "mi" => Ok(DistanceUnit::Mi),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for DistanceUnit {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            DistanceUnit::Km => out.write_all(b"km")?,
            DistanceUnit::Mi => out.write_all(b"mi")?,
        }
        Ok(IsNull::No)
    }
}
