//! Request DTOs and payload shape validation.
//!
//! Validation is the last stop before a payload is forwarded upstream: type
//! shape comes from serde (unknown fields rejected), field/length rules live
//! here. A request that fails validation never costs an upstream call.

use serde::Deserialize;
use serde_json::{Map, Value, json};

use pressgate_core::{DomainError, DomainResult};

const MAX_TITLE_LEN: usize = 200;
const MAX_ARTICLE_BODY_LEN: usize = 50_000;
const MAX_COMMENT_BODY_LEN: usize = 10_000;
const MAX_TAGS_PER_ARTICLE: usize = 20;
const MAX_TAG_NAME_LEN: usize = 64;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdateArticleRequest {
    /// Validate and produce the payload forwarded upstream (present fields
    /// only).
    pub fn into_payload(self) -> DomainResult<Value> {
        let mut payload = Map::new();

        if let Some(title) = self.title {
            if title.trim().is_empty() {
                return Err(DomainError::validation("title must not be empty"));
            }
            if title.chars().count() > MAX_TITLE_LEN {
                return Err(DomainError::validation(format!(
                    "title exceeds {MAX_TITLE_LEN} characters"
                )));
            }
            payload.insert("title".to_string(), Value::String(title));
        }

        if let Some(body) = self.body {
            if body.trim().is_empty() {
                return Err(DomainError::validation("body must not be empty"));
            }
            if body.chars().count() > MAX_ARTICLE_BODY_LEN {
                return Err(DomainError::validation(format!(
                    "body exceeds {MAX_ARTICLE_BODY_LEN} characters"
                )));
            }
            payload.insert("body".to_string(), Value::String(body));
        }

        if let Some(tags) = self.tags {
            if tags.len() > MAX_TAGS_PER_ARTICLE {
                return Err(DomainError::validation(format!(
                    "at most {MAX_TAGS_PER_ARTICLE} tags per article"
                )));
            }
            for tag in &tags {
                validate_tag_name(tag)?;
            }
            payload.insert("tags".to_string(), json!(tags));
        }

        if payload.is_empty() {
            return Err(DomainError::validation(
                "at least one of title, body, tags is required",
            ));
        }

        Ok(Value::Object(payload))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateCommentRequest {
    pub body: String,
}

impl UpdateCommentRequest {
    pub fn into_payload(self) -> DomainResult<Value> {
        if self.body.trim().is_empty() {
            return Err(DomainError::validation("body must not be empty"));
        }
        if self.body.chars().count() > MAX_COMMENT_BODY_LEN {
            return Err(DomainError::validation(format!(
                "body exceeds {MAX_COMMENT_BODY_LEN} characters"
            )));
        }
        Ok(json!({ "body": self.body }))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTagRequest {
    pub name: String,
}

impl CreateTagRequest {
    pub fn into_payload(self) -> DomainResult<Value> {
        validate_tag_name(&self.name)?;
        Ok(json!({ "name": self.name }))
    }
}

fn validate_tag_name(name: &str) -> DomainResult<()> {
    if name.is_empty() {
        return Err(DomainError::validation("tag name must not be empty"));
    }
    if name.len() > MAX_TAG_NAME_LEN {
        return Err(DomainError::validation(format!(
            "tag name exceeds {MAX_TAG_NAME_LEN} characters"
        )));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(DomainError::validation(
            "tag name must be lowercase alphanumeric with dashes",
        ));
    }
    Ok(())
}
