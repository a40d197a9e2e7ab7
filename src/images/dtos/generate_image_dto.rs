use serde::{Deserialize, Serialize};

/// Only the field types are checked; the api decides which values it accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateImageDto {
    pub prompt: String,
    pub width: i64,
    pub height: i64,
    pub enhance: bool,
    pub steps: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_negative_values() {
        let body = r#"{"prompt":"cat","width":-1,"height":5000000000,"enhance":false,"steps":0}"#;
        let dto = serde_json::from_str::<GenerateImageDto>(body).unwrap();

        assert_eq!(dto.width, -1);
        assert_eq!(dto.height, 5_000_000_000);
        assert_eq!(dto.steps, 0);
    }

    #[test]
    fn rejects_non_integer_fields() {
        let body = r#"{"prompt":"cat","width":"wide","height":512,"enhance":true,"steps":20}"#;
        assert!(serde_json::from_str::<GenerateImageDto>(body).is_err());

        let body = r#"{"prompt":"cat","width":512,"height":512,"enhance":"yes","steps":20}"#;
        assert!(serde_json::from_str::<GenerateImageDto>(body).is_err());

        let body = r#"{"prompt":"cat","width":512.5,"height":512,"enhance":true,"steps":20}"#;
        assert!(serde_json::from_str::<GenerateImageDto>(body).is_err());
    }
}
