// Quiz Domain Value Objects
//
// 问卷答案的值对象：困扰类型、心情、感受描述

use serde::{Deserialize, Serialize};
use std::fmt;

use super::QuizError;

/// 感受描述的最大字符数
pub const FEELINGS_MAX_CHARS: usize = 55;

/// 未作答时的占位文本
pub const NOT_ANSWERED: &str = "[Not Answered]";

/// 用户需要支持的困扰类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Issue {
    Anxiety,
    Depression,
    Loneliness,
    #[serde(rename = "Social Anxiety")]
    SocialAnxiety,
    Stress,
    Burnout,
    Grief,
    #[serde(rename = "Low Self-Esteem")]
    LowSelfEsteem,
}

impl Issue {
    pub const ALL: [Issue; 8] = [
        Issue::Anxiety,
        Issue::Depression,
        Issue::Loneliness,
        Issue::SocialAnxiety,
        Issue::Stress,
        Issue::Burnout,
        Issue::Grief,
        Issue::LowSelfEsteem,
    ];

    /// 展示名称（与序列化名称一致）
    pub fn display_name(&self) -> &'static str {
        match self {
            Issue::Anxiety => "Anxiety",
            Issue::Depression => "Depression",
            Issue::Loneliness => "Loneliness",
            Issue::SocialAnxiety => "Social Anxiety",
            Issue::Stress => "Stress",
            Issue::Burnout => "Burnout",
            Issue::Grief => "Grief",
            Issue::LowSelfEsteem => "Low Self-Esteem",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 心情选项（可多选）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Worried,
    Calm,
    Neutral,
    Excited,
    Grateful,
    Embarrassed,
    Motivated,
    Bored,
    Proud,
}

impl Mood {
    pub fn display_name(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Worried => "Worried",
            Mood::Calm => "Calm",
            Mood::Neutral => "Neutral",
            Mood::Excited => "Excited",
            Mood::Grateful => "Grateful",
            Mood::Embarrassed => "Embarrassed",
            Mood::Motivated => "Motivated",
            Mood::Bored => "Bored",
            Mood::Proud => "Proud",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 用户对自身感受的自由描述
///
/// 空白输入归一化为 `[Not Answered]`，超过 55 个字符的输入被拒绝
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Feelings(String);

impl Feelings {
    pub fn parse(input: impl Into<String>) -> Result<Self, QuizError> {
        let input = input.into();
        let trimmed = input.trim();

        if trimmed.is_empty() || trimmed == NOT_ANSWERED {
            return Ok(Self::not_answered());
        }

        let len = trimmed.chars().count();
        if len > FEELINGS_MAX_CHARS {
            return Err(QuizError::FeelingsTooLong {
                len,
                max: FEELINGS_MAX_CHARS,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn not_answered() -> Self {
        Self(NOT_ANSWERED.to_string())
    }

    pub fn is_answered(&self) -> bool {
        self.0 != NOT_ANSWERED
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Feelings {
    fn default() -> Self {
        Self::not_answered()
    }
}

impl TryFrom<String> for Feelings {
    type Error = QuizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Feelings> for String {
    fn from(feelings: Feelings) -> Self {
        feelings.0
    }
}

impl fmt::Display for Feelings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
