use crate::entity::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MovePlayer(Direction),
    Start,
    Stop,
    Exit,
}
