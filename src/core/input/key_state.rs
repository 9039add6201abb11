//=========================================================================
// Key State
//=========================================================================
//
// Enum-indexed boolean flags for the fixed set of keys the game tracks.
//
// Architecture:
//   GameKey → index → [bool; GameKey::COUNT] (held) + (pressed this frame)
//
// Frame lifecycle: begin_frame() → press()/release() → query
//
//=========================================================================

//=== GameKey =============================================================

/// Logical keys tracked by the game.
///
/// One flag per variant; there is no open-ended key map, so the set of
/// tracked keys is closed and every `match` over it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Forward,
    Back,
    Left,
    Right,
    Interact,
    Restart,
}

impl GameKey {
    /// Number of tracked keys.
    pub const COUNT: usize = 6;

    /// All tracked keys in index order.
    pub const ALL: [GameKey; GameKey::COUNT] = [
        GameKey::Forward,
        GameKey::Back,
        GameKey::Left,
        GameKey::Right,
        GameKey::Interact,
        GameKey::Restart,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

//=== KeyState ============================================================

/// Held state plus one-frame press edges for every [`GameKey`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    //--- Persistent State (survives frame boundary) ----------------------
    down: [bool; GameKey::COUNT],

    //--- Frame Deltas (reset each frame via begin_frame()) ---------------
    pressed: [bool; GameKey::COUNT],
}

impl KeyState {
    /// Creates a state with every key released.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears the per-frame press edges.
    pub(crate) fn begin_frame(&mut self) {
        self.pressed = [false; GameKey::COUNT];
    }

    /// Marks a key as held. Returns `true` on an UP → DOWN transition.
    ///
    /// OS key repeat produces repeated presses; only the first one counts
    /// as an edge.
    pub fn press(&mut self, key: GameKey) -> bool {
        let i = key.index();
        if self.down[i] {
            return false;
        }
        self.down[i] = true;
        self.pressed[i] = true;
        true
    }

    /// Marks a key as released. Returns `true` if it was held.
    pub fn release(&mut self, key: GameKey) -> bool {
        let i = key.index();
        std::mem::replace(&mut self.down[i], false)
    }

    /// Releases every key and drops pending edges.
    ///
    /// Used when the window loses visibility: key-up events that happen
    /// while hidden never reach us, so the actor would keep walking.
    pub fn release_all(&mut self) {
        self.down = [false; GameKey::COUNT];
        self.pressed = [false; GameKey::COUNT];
    }

    //--- Query API --------------------------------------------------------

    /// Returns `true` while the key is held.
    pub fn is_down(&self, key: GameKey) -> bool {
        self.down[key.index()]
    }

    /// Returns `true` only on the frame the key went down.
    pub fn just_pressed(&self, key: GameKey) -> bool {
        self.pressed[key.index()]
    }

    /// Returns `true` if any movement key is held.
    pub fn any_movement(&self) -> bool {
        [GameKey::Forward, GameKey::Back, GameKey::Left, GameKey::Right]
            .iter()
            .any(|&k| self.is_down(k))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
