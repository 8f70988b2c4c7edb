// services/oracle.rs
//
// Request/reply codec for the generative content service. Sans-IO: this
// module builds the HTTP request the bridge should send and decodes the body
// it gets back. Both entry points degrade to a fixed fallback on any failure,
// so nothing here ever surfaces an error to the controller.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::config::OracleConfig;
use crate::api::error::{OracleError, TransportError};
use crate::api::types::{
    AnimationSpeed, Complexity, Difficulty, Language, RiddleRecord, ShapeStyle,
    ValidationVerdict, VisualConfig,
};

/// Explanation carried by the fallback verdict.
pub const SIGNAL_LOST: &str = "Signal Lost.";

const SYSTEM_INSTRUCTION: &str =
    "You are an abstract artist AI. You communicate through colors and cryptic poetry.";

/// A fully-formed HTTP POST for the bridge to send.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OracleRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON body.
    pub body: String,
}

/// Builds requests against a `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct OracleClient {
    config: OracleConfig,
}

impl OracleClient {
    pub fn new(config: OracleConfig) -> Self {
        Self { config }
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    fn request(&self, prompt: &str, system: Option<&str>, schema: Value) -> OracleRequest {
        let mut body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            },
        });
        if let Some(system) = system {
            body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
        }

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if !self.config.api_key.is_empty() {
            headers.push(("x-goog-api-key".to_string(), self.config.api_key.clone()));
        }

        OracleRequest {
            url: self.url(),
            headers,
            body: body.to_string(),
        }
    }

    /// Ask for a fresh riddle written in `lang`.
    pub fn riddle_request(&self, lang: Language) -> OracleRequest {
        self.request(&riddle_prompt(lang), Some(SYSTEM_INSTRUCTION), riddle_schema())
    }

    /// Ask whether `guess` names the concept behind `question`.
    pub fn verdict_request(&self, question: &str, guess: &str, lang: Language) -> OracleRequest {
        self.request(&verdict_prompt(question, guess, lang), None, verdict_schema())
    }
}

pub fn riddle_prompt(lang: Language) -> String {
    let name = lang.name();
    format!(
        r##"Generate a "Cyber-Synesthesia" puzzle in {name}.

Goal: think of a concrete object or concept (e.g., "Thunder", "Cactus", "Internet", "Ghost").
Do NOT tell the user what it is directly.
Instead, define how it "looks" and "feels" using the visualConfig parameters.

Visual Config Logic:
- Colors: Pick 3 hex codes that perfectly capture the vibe.
- Speed: Does it move fast or slow?
- Shape: Is it sharp (danger/tech), liquid (water/ghost), or rounded (organic)?

The 'question' field should NOT be a riddle. It should be a single, cryptic poetic line describing the *feeling* of the object in {name}.

Example for "Volcano":
Colors: ["#FF4500", "#330000", "#FFD700"]
Speed: "chaos"
Shape: "liquid"
Question (TR): "Toprak öfkelendiğinde kustuğu kan."

Output JSON keys in English, values adapted to {name}."##
    )
}

pub fn verdict_prompt(question: &str, guess: &str, lang: Language) -> String {
    let name = lang.name();
    format!(
        r#"Abstract Hint (in {name}): "{question}"
User's Guess: "{guess}"

Is the user's guess the correct object concept?
Context: The user is looking at an abstract art piece representing the concept.

CRITICAL VALIDATION RULES:
1. IGNORE CASE: "Apple" = "apple" = "APPLE".
2. IGNORE ACCENTS: "Kâğıt" = "kagit".
3. ALLOW SYNONYMS: If the answer is "Ocean" and user says "Sea", it is CORRECT.
4. IGNORE MINOR TYPOS: 1-2 letter mistakes are acceptable.

Respond with JSON.
The 'explanation' should be atmospheric and in {name}."#
    )
}

/// Output schema for riddle generation.
pub fn riddle_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "question": {
                "type": "STRING",
                "description": "A very short, abstract poetic hint (max 10 words). NOT a direct question.",
            },
            "visualConfig": {
                "type": "OBJECT",
                "properties": {
                    "colors": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "3 Hex color codes representing the concept's mood.",
                    },
                    "animationSpeed": {
                        "type": "STRING",
                        "enum": ["slow", "normal", "fast", "chaos"],
                        "description": "The speed of the concept (e.g., Fire=chaos, Ocean=slow).",
                    },
                    "shapeStyle": {
                        "type": "STRING",
                        "enum": ["rounded", "sharp", "liquid"],
                        "description": "The physical feeling of the concept.",
                    },
                    "complexity": { "type": "STRING", "enum": ["minimal", "complex"] },
                },
                "required": ["colors", "animationSpeed", "shapeStyle", "complexity"],
            },
            "difficulty": { "type": "STRING", "enum": ["Easy", "Medium", "Hard"] },
            "answer": { "type": "STRING", "description": "The correct answer (single noun)." },
        },
        "required": ["question", "visualConfig", "difficulty", "answer"],
    })
}

/// Output schema for answer validation.
pub fn verdict_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "isCorrect": { "type": "BOOLEAN" },
            "explanation": { "type": "STRING" },
        },
        "required": ["isCorrect", "explanation"],
    })
}

// ---- Reply decoding ----

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// Riddle as the service returns it. `answer` is required by the schema but
/// deliberately dropped once parsed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RiddleReply {
    question: String,
    visual_config: VisualConfig,
    difficulty: Difficulty,
    #[allow(dead_code)]
    answer: String,
}

/// The JSON text the model produced: the first candidate's parts, joined.
pub fn candidate_text(body: &str) -> Result<String, OracleError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(OracleError::EmptyReply);
    }
    Ok(text)
}

/// Decode a generation reply into a riddle carrying `id`.
pub fn parse_riddle(body: &str, id: String) -> Result<RiddleRecord, OracleError> {
    let text = candidate_text(body)?;
    let reply: RiddleReply = serde_json::from_str(&text)?;
    reply.visual_config.validate().map_err(OracleError::Schema)?;
    if reply.question.trim().is_empty() {
        return Err(OracleError::Schema("question is empty".to_string()));
    }
    Ok(RiddleRecord {
        id,
        question: reply.question,
        visual_config: reply.visual_config,
        difficulty: reply.difficulty,
    })
}

/// Decode a validation reply.
pub fn parse_verdict(body: &str) -> Result<ValidationVerdict, OracleError> {
    let text = candidate_text(body)?;
    Ok(serde_json::from_str(&text)?)
}

/// The riddle shown when generation fails.
pub fn fallback_riddle(lang: Language, id: String) -> RiddleRecord {
    let question = match lang {
        Language::Tr => "Sessizlik siyah bir pelerin giyer.",
        _ => "Silence wears a black cloak.",
    };
    RiddleRecord {
        id,
        question: question.to_string(),
        visual_config: VisualConfig {
            colors: vec!["#0f0b15".into(), "#1a1a2e".into(), "#ffffff".into()],
            animation_speed: AnimationSpeed::Slow,
            shape_style: ShapeStyle::Liquid,
            complexity: Complexity::Minimal,
        },
        difficulty: Difficulty::Easy,
    }
}

/// The verdict used when validation fails.
pub fn fallback_verdict() -> ValidationVerdict {
    ValidationVerdict {
        is_correct: false,
        explanation: SIGNAL_LOST.to_string(),
    }
}

/// Riddle id: fetch date, language and a random component.
pub fn riddle_id(today: &str, lang: Language, nonce: &str) -> String {
    format!("{today}-{lang}-{nonce}")
}

/// Turn whatever the bridge delivered into a riddle. Never fails.
pub fn riddle_from_reply(
    reply: Result<String, TransportError>,
    lang: Language,
    today: &str,
    nonce: &str,
) -> RiddleRecord {
    let parsed = reply
        .map_err(OracleError::from)
        .and_then(|body| parse_riddle(&body, riddle_id(today, lang, nonce)));
    match parsed {
        Ok(riddle) => riddle,
        Err(e) => {
            log::error!("riddle generation failed, using fallback: {}", e);
            fallback_riddle(lang, format!("fallback-visual-{}", riddle_id(today, lang, nonce)))
        }
    }
}

/// Turn whatever the bridge delivered into a verdict. Never fails.
pub fn verdict_from_reply(reply: Result<String, TransportError>) -> ValidationVerdict {
    match reply.map_err(OracleError::from).and_then(|body| parse_verdict(&body)) {
        Ok(verdict) => verdict,
        Err(e) => {
            log::error!("answer validation failed: {}", e);
            fallback_verdict()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wrap model output the way the service does.
    fn reply(inner: &str) -> String {
        json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": inner }] } }]
        })
        .to_string()
    }

    const VOLCANO: &str = r##"{
        "question": "Toprak öfkelendiğinde kustuğu kan.",
        "visualConfig": {
            "colors": ["#FF4500", "#330000", "#FFD700"],
            "animationSpeed": "chaos",
            "shapeStyle": "liquid",
            "complexity": "complex"
        },
        "difficulty": "Hard",
        "answer": "Volkan"
    }"##;

    #[test]
    fn riddle_request_targets_generate_content() {
        let client = OracleClient::new(OracleConfig {
            api_key: "secret".into(),
            ..OracleConfig::default()
        });
        let req = client.riddle_request(Language::Fr);
        assert_eq!(
            req.url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
        assert!(req.headers.contains(&("x-goog-api-key".to_string(), "secret".to_string())));

        let body: Value = serde_json::from_str(&req.body).unwrap();
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("in French"));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["question", "visualConfig", "difficulty", "answer"])
        );
        assert!(body["systemInstruction"]["parts"][0]["text"].is_string());
    }

    #[test]
    fn omits_key_header_without_key() {
        let client = OracleClient::new(OracleConfig::default());
        let req = client.verdict_request("q", "g", Language::En);
        assert!(req.headers.iter().all(|(k, _)| k != "x-goog-api-key"));
    }

    #[test]
    fn verdict_request_carries_hint_and_guess() {
        let client = OracleClient::new(OracleConfig::default());
        let req = client.verdict_request("Silence wears a black cloak.", "night", Language::Es);
        let body: Value = serde_json::from_str(&req.body).unwrap();
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("\"Silence wears a black cloak.\""));
        assert!(prompt.contains("User's Guess: \"night\""));
        assert!(prompt.contains("in Spanish"));
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn parses_good_riddle_and_drops_answer() {
        let riddle = riddle_from_reply(Ok(reply(VOLCANO)), Language::Tr, "2026-10-16", "ab12");
        assert_eq!(riddle.id, "2026-10-16-tr-ab12");
        assert_eq!(riddle.difficulty, Difficulty::Hard);
        assert_eq!(riddle.visual_config.complexity, Complexity::Complex);
        let json = serde_json::to_string(&riddle).unwrap();
        assert!(!json.contains("Volkan"));
    }

    #[test]
    fn network_error_gives_fallback_riddle() {
        let riddle = riddle_from_reply(
            Err(TransportError::Network("offline".into())),
            Language::En,
            "2026-10-16",
            "ff",
        );
        assert_eq!(riddle.difficulty, Difficulty::Easy);
        assert_eq!(riddle.visual_config.complexity, Complexity::Minimal);
        assert_eq!(riddle.visual_config.animation_speed, AnimationSpeed::Slow);
        assert_eq!(riddle.visual_config.shape_style, ShapeStyle::Liquid);
        assert_eq!(riddle.question, "Silence wears a black cloak.");
        assert!(riddle.id.starts_with("fallback-visual-"));
    }

    #[test]
    fn turkish_fallback_is_translated() {
        let riddle = riddle_from_reply(Err(TransportError::Http(500)), Language::Tr, "d", "n");
        assert_eq!(riddle.question, "Sessizlik siyah bir pelerin giyer.");
    }

    #[test]
    fn schema_mismatch_gives_fallback_riddle() {
        let missing_answer = r##"{
            "question": "q",
            "visualConfig": { "colors": ["#fff"], "animationSpeed": "slow",
                              "shapeStyle": "sharp", "complexity": "complex" },
            "difficulty": "Medium"
        }"##;
        let riddle = riddle_from_reply(Ok(reply(missing_answer)), Language::En, "d", "n");
        assert_eq!(riddle.difficulty, Difficulty::Easy);

        let empty_colors = VOLCANO.replace(r##"["#FF4500", "#330000", "#FFD700"]"##, "[]");
        let riddle = riddle_from_reply(Ok(reply(&empty_colors)), Language::En, "d", "n");
        assert_eq!(riddle.visual_config.complexity, Complexity::Minimal);
    }

    #[test]
    fn empty_candidate_list_is_an_error() {
        assert!(matches!(
            candidate_text(r#"{"candidates": []}"#),
            Err(OracleError::EmptyReply)
        ));
        assert!(matches!(candidate_text("not json"), Err(OracleError::Json(_))));
    }

    #[test]
    fn split_parts_are_joined() {
        let body = json!({
            "candidates": [{ "content": { "parts": [
                { "text": "{\"isCorrect\": true, " },
                { "text": "\"explanation\": \"The mountain bleeds.\"}" }
            ] } }]
        })
        .to_string();
        let verdict = parse_verdict(&body).unwrap();
        assert!(verdict.is_correct);
        assert_eq!(verdict.explanation, "The mountain bleeds.");
    }

    #[test]
    fn validation_failure_is_signal_lost() {
        for err in [
            TransportError::Network("reset".into()),
            TransportError::Http(429),
            TransportError::Bridge("threw".into()),
        ] {
            assert_eq!(
                verdict_from_reply(Err(err)),
                ValidationVerdict { is_correct: false, explanation: "Signal Lost.".into() }
            );
        }
        assert_eq!(verdict_from_reply(Ok(reply("{\"isCorrect\": 1}"))), fallback_verdict());
    }
}
