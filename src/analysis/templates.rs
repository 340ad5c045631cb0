//! 固定提示词模板
//!
//! 每个模板只有一个替换点：用户的问题，原样嵌入，不做转义。

/// PESTLE-M 地缘政治分析模板
pub fn geopolitical(question: &str) -> String {
    format!(
        r#"You are a strategic foresight analyst. Analyze the following question using the PESTLE-M framework (Political, Economic, Social, Technological, Legal, Environmental, Military).

Question: "{question}"

Provide your analysis in the following JSON format only (no other text):

{{
  "pestle_analysis": {{
    "political": "2-3 sentence analysis",
    "economic": "2-3 sentence analysis",
    "social": "2-3 sentence analysis",
    "technological": "2-3 sentence analysis",
    "legal": "2-3 sentence analysis",
    "environmental": "2-3 sentence analysis",
    "military": "2-3 sentence analysis"
  }},
  "scenarios": [
    {{
      "type": "Baseline",
      "description": "Most realistic scenario based on current trends (3-4 sentences)",
      "probability": 60,
      "timeframe": "timeframe estimate",
      "key_indicators": ["indicator 1", "indicator 2", "indicator 3"]
    }},
    {{
      "type": "Plausible",
      "description": "Alternative possible scenario (3-4 sentences)",
      "probability": 30,
      "timeframe": "timeframe estimate",
      "key_indicators": ["indicator 1", "indicator 2", "indicator 3"]
    }},
    {{
      "type": "Wildcard",
      "description": "Low probability, high impact scenario (3-4 sentences)",
      "probability": 10,
      "timeframe": "timeframe estimate",
      "key_indicators": ["indicator 1", "indicator 2", "indicator 3"]
    }}
  ],
  "overall_assessment": "2-3 sentence summary of the analysis",
  "strategic_questions": [
    "Strategic question 1 that executives should ask their organization",
    "Strategic question 2 that executives should ask their organization",
    "Strategic question 3 that executives should ask their organization",
    "Strategic question 4 that executives should ask their organization",
    "Strategic question 5 that executives should ask their organization"
  ],
  "data_sources": [
    "Data source or factor 1 that informed this analysis",
    "Data source or factor 2 that informed this analysis",
    "Data source or factor 3 that informed this analysis",
    "Data source or factor 4 that informed this analysis",
    "Data source or factor 5 that informed this analysis"
  ]
}}"#
    )
}

/// 网络安全业务风险分析模板
pub fn cyber(question: &str) -> String {
    format!(
        r#"You are a cyber risk analyst advising a board of directors. Analyze the following question in terms of the business risks it creates for an organization.

Question: "{question}"

Provide your analysis in the following JSON format only (no other text):

{{
  "business_risks": {{
    "legal_compliance": "2-3 sentence analysis of regulatory, contractual and litigation exposure",
    "operational_disruption": "2-3 sentence analysis of impact on systems, processes and service availability",
    "brand_impairment": "2-3 sentence analysis of reputational damage and loss of customer trust",
    "financial_fraud": "2-3 sentence analysis of theft, fraud and direct monetary loss",
    "competitive_disadvantage": "2-3 sentence analysis of lost intellectual property and market position"
  }},
  "overall_impact": "2-3 sentence summary of the combined business impact",
  "average_cost": "Estimated average cost of such an incident with a short justification",
  "executive_questions": [
    "Question 1 that executives should ask their security team",
    "Question 2 that executives should ask their security team",
    "Question 3 that executives should ask their security team",
    "Question 4 that executives should ask their security team",
    "Question 5 that executives should ask their security team"
  ],
  "data_sources": [
    "Data source or factor 1 that informed this analysis",
    "Data source or factor 2 that informed this analysis",
    "Data source or factor 3 that informed this analysis",
    "Data source or factor 4 that informed this analysis",
    "Data source or factor 5 that informed this analysis"
  ]
}}"#
    )
}
