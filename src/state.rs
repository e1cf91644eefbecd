#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NavigationState {
    Resting,  // Accepting navigation
    Settling, // A step is in flight, navigation is locked until it settles
}
