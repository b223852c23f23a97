use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotReadState {
    MissNotHot,
    MissHotLockAcquired,
    MissHotLockDenied,
    Hit,
}
