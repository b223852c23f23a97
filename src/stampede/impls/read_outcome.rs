use crate::stampede::enums::hot_read_state::HotReadState;
use crate::stampede::structs::read_outcome::ReadOutcome;

impl ReadOutcome {
    pub fn hit(value: Vec<u8>) -> ReadOutcome {
        ReadOutcome {
            state: HotReadState::Hit,
            value: Some(value),
        }
    }

    pub fn miss(state: HotReadState) -> ReadOutcome {
        ReadOutcome { state, value: None }
    }

    pub fn is_hit(&self) -> bool {
        self.state == HotReadState::Hit
    }

    pub fn into_value(self) -> Option<Vec<u8>> {
        self.value
    }
}
