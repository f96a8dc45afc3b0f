//! Few-shot conversations sent with each model request.

use serde::{Deserialize, Serialize};

use crate::data::ReferenceTables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

const CLASSIFY_SHOTS: &[(&str, &str)] = &[
    (
        "lseg.com",
        "Financial Services, Information Technology and Internet",
    ),
    ("reddit.com", "Social Network"),
    (
        "amazon.com",
        "Shopping and E-Commerce, Information Technology and Internet",
    ),
    ("facebook.com", "Social Network"),
    ("kmsec.uk", "Information Technology and Internet"),
    ("pornhub.com", "Adult Content"),
];

const GEOLOCATE_SHOTS: &[(&str, &str)] = &[
    ("lseg.com", "United Kingdom"),
    ("reddit.com", "United States of America"),
    ("amazon.com", "United States of America"),
    ("shell.com", "United Kingdom"),
    ("kmsec.uk", "United Kingdom"),
    ("sap.com", "Germany"),
];

/// The fixed part of both conversations, built once from the taxonomy.
#[derive(Debug, Clone)]
pub struct PromptSet {
    classify: Vec<ChatMessage>,
    geolocate: Vec<ChatMessage>,
}

impl PromptSet {
    pub fn new(tables: &ReferenceTables) -> Self {
        let classify_system = format!(
            "Your role is to categorise domains according to the categories listed below:\n\n\
             {}\n\n\
             Reply only with a comma separated list of categories relevant to the domain. \
             Only use the categories listed above. If you are unable to categorise a domain \
             due to low confidence, use \"Other\".",
            tables.industry_names().join("\n")
        );
        let geolocate_system = format!(
            "Your role is to assign a country to a domain based on where the domain \
             historically is from.\n\n\
             You must only use the following countries to assign to a domain:\n\n\
             {}\n\n\
             Reply with the geolocation country. If you are unable to assign a geolocation, \
             use \"Other\".",
            tables.country_names().join("\n")
        );

        Self {
            classify: conversation(classify_system, CLASSIFY_SHOTS),
            geolocate: conversation(geolocate_system, GEOLOCATE_SHOTS),
        }
    }

    pub fn classify(&self, prompt: &str) -> Vec<ChatMessage> {
        with_question(&self.classify, prompt)
    }

    pub fn geolocate(&self, prompt: &str) -> Vec<ChatMessage> {
        with_question(&self.geolocate, prompt)
    }
}

fn conversation(system: String, shots: &[(&str, &str)]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(1 + shots.len() * 2);
    messages.push(ChatMessage::new(Role::System, system));
    for (question, answer) in shots {
        messages.push(ChatMessage::new(Role::User, *question));
        messages.push(ChatMessage::new(Role::Assistant, *answer));
    }
    messages
}

fn with_question(prefix: &[ChatMessage], prompt: &str) -> Vec<ChatMessage> {
    let mut messages = prefix.to_vec();
    messages.push(ChatMessage::new(Role::User, prompt));
    messages
}
