use crate::gameplay::ActionRequest;
use crate::Chips;
use serde::Deserialize;

/// Body of `POST /games`. `ai_count` seats an AI of each personality in
/// turn order (conservative, aggressive, mathematical), capped at three —
/// a table seats the human plus up to three opponents.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGameRequest {
    pub human_name: String,
    pub ai_count: usize,
}

/// Body of `POST /games/{id}/actions`. `amount` is only read for `raise`
/// and names the seat's intended new total bet, matching
/// `ActionRequest::Raise`'s convention.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequestDto {
    pub action: String,
    pub amount: Option<Chips>,
}

#[derive(Debug, Clone)]
pub struct ActionParseError(pub String);

impl std::fmt::Display for ActionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<ActionRequestDto> for ActionRequest {
    type Error = ActionParseError;

    fn try_from(dto: ActionRequestDto) -> Result<Self, Self::Error> {
        match dto.action.to_ascii_lowercase().as_str() {
            "fold" => Ok(ActionRequest::Fold),
            "check" => Ok(ActionRequest::Check),
            "call" => Ok(ActionRequest::Call),
            "all_in" | "all-in" | "allin" => Ok(ActionRequest::AllIn),
            "raise" => {
                let amount = dto
                    .amount
                    .ok_or_else(|| ActionParseError("raise requires an amount".into()))?;
                Ok(ActionRequest::Raise(amount))
            }
            other => Err(ActionParseError(format!("unknown action \"{other}\""))),
        }
    }
}
