//! 分析请求与提示词构建
//!
//! 从入站请求体解析 `question` 和 `type`，选择固定模板并生成发往上游的提示词。
//! 这里的一切都是纯函数，不做任何 I/O。

mod templates;

use serde_json::Value;

use crate::utils::{is_truthy, value_to_text};

/// 选择业务风险模板的 `type` 取值
pub const CYBER_TYPE: &str = "cyber";

/// 分析类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AnalysisKind {
    /// PESTLE-M 地缘政治分析
    #[default]
    Geopolitical,
    /// 网络安全业务风险分析
    Cyber,
}

impl AnalysisKind {
    /// 由请求体中的 `type` 字段决定分析类型
    ///
    /// 只有字符串 `"cyber"` 选择业务风险模板，其余取值（包括缺失、
    /// 非字符串和未知字符串）一律回落到默认模板，不报错
    pub fn from_type(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some(CYBER_TYPE) => AnalysisKind::Cyber,
            _ => AnalysisKind::Geopolitical,
        }
    }

    /// 作为请求体 `type` 字段发送时的取值
    pub fn as_type(&self) -> Option<&'static str> {
        match self {
            AnalysisKind::Cyber => Some(CYBER_TYPE),
            AnalysisKind::Geopolitical => None,
        }
    }
}

/// 单次请求内的分析请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub question: String,
    pub kind: AnalysisKind,
}

impl AnalysisRequest {
    /// 从入站 JSON 请求体构建
    ///
    /// `question` 缺失或为假值时返回 `None`
    pub fn from_body(body: &Value) -> Option<Self> {
        let question = body.get("question").filter(|q| is_truthy(q))?;

        Some(Self {
            question: value_to_text(question),
            kind: AnalysisKind::from_type(body.get("type")),
        })
    }
}

/// 发往上游的提示词，构建后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamPrompt(String);

impl UpstreamPrompt {
    /// 把问题原样嵌入所选模板
    pub fn build(request: &AnalysisRequest) -> Self {
        let text = match request.kind {
            AnalysisKind::Geopolitical => templates::geopolitical(&request.question),
            AnalysisKind::Cyber => templates::cyber(&request.question),
        };
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const GEOPOLITICAL_KEYS: &[&str] = &[
        "pestle_analysis",
        "political",
        "economic",
        "social",
        "technological",
        "legal",
        "environmental",
        "military",
        "scenarios",
        "key_indicators",
        "overall_assessment",
        "strategic_questions",
        "data_sources",
    ];

    const CYBER_KEYS: &[&str] = &[
        "business_risks",
        "legal_compliance",
        "operational_disruption",
        "brand_impairment",
        "financial_fraud",
        "competitive_disadvantage",
        "overall_impact",
        "average_cost",
        "executive_questions",
        "data_sources",
    ];

    fn prompt_for(body: Value) -> String {
        let request = AnalysisRequest::from_body(&body).expect("question present");
        UpstreamPrompt::build(&request).as_str().to_string()
    }

    #[test]
    fn missing_or_falsy_question_is_rejected() {
        for body in [
            json!({}),
            json!({"question": null}),
            json!({"question": ""}),
            json!({"question": "   "}),
            json!({"question": 0}),
            json!({"question": false}),
            json!(null),
            json!("question"),
            json!([1, 2, 3]),
        ] {
            assert_eq!(AnalysisRequest::from_body(&body), None, "body: {body}");
        }
    }

    #[test]
    fn type_selection_is_a_two_way_branch() {
        assert_eq!(AnalysisKind::from_type(Some(&json!("cyber"))), AnalysisKind::Cyber);
        assert_eq!(AnalysisKind::from_type(None), AnalysisKind::Geopolitical);
        assert_eq!(
            AnalysisKind::from_type(Some(&json!("Cyber"))),
            AnalysisKind::Geopolitical
        );
        assert_eq!(
            AnalysisKind::from_type(Some(&json!("finance"))),
            AnalysisKind::Geopolitical
        );
        assert_eq!(
            AnalysisKind::from_type(Some(&json!(["cyber"]))),
            AnalysisKind::Geopolitical
        );
    }

    #[test]
    fn cyber_prompt_uses_business_risk_schema() {
        let prompt = prompt_for(json!({"question": "Ransomware on our ERP?", "type": "cyber"}));

        for key in CYBER_KEYS {
            assert!(prompt.contains(key), "missing {key}");
        }
        assert!(!prompt.contains("pestle_analysis"));
        assert!(!prompt.contains("scenarios"));
        assert!(prompt.contains("Question: \"Ransomware on our ERP?\""));
    }

    #[test]
    fn default_prompt_uses_pestle_schema() {
        for body in [
            json!({"question": "Q"}),
            json!({"question": "Q", "type": "geopolitical"}),
            json!({"question": "Q", "type": 7}),
        ] {
            let prompt = prompt_for(body);
            for key in GEOPOLITICAL_KEYS {
                assert!(prompt.contains(key), "missing {key}");
            }
            assert!(!prompt.contains("business_risks"));
        }
    }

    #[test]
    fn question_is_inserted_verbatim() {
        let question = "Will country X hold elections in 2025? \"{braces}\" <b>";
        let prompt = prompt_for(json!({ "question": question }));
        assert!(prompt.contains(question));
    }

    #[test]
    fn prompt_is_deterministic() {
        let body = json!({"question": "Q", "type": "cyber"});
        assert_eq!(prompt_for(body.clone()), prompt_for(body));
    }

    #[test]
    fn non_string_question_is_rendered_as_text() {
        let prompt = prompt_for(json!({"question": 2025}));
        assert!(prompt.contains("Question: \"2025\""));
    }
}
