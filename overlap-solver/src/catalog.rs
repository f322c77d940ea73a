//! Enumerated constants: the 68-button command set, the three devices'
//! mode lists, relative-state pairs, and the mode -> command lookup
//! tables. No behavior beyond lookup lives here.

/// One of the 68 distinct remote-control button presses.
///
/// Every command has a *primary* effect (one device) and an optional
/// *side effect* (a second device), see [`Command::effects`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    FrontOnOff = 0,
    FrontPlayPause = 1,
    FrontDim = 2,
    FrontBrighten = 3,
    FrontR = 4,
    FrontG = 5,
    FrontB = 6,
    FrontW = 7,
    FrontW2 = 8,
    FrontW3 = 9,
    FrontW4 = 10,
    FrontW5PotFade = 11,
    FrontB2 = 12,
    FrontB3 = 13,
    FrontB4 = 14,
    FrontB5PotB4 = 15,
    FrontG2 = 16,
    FrontG3 = 17,
    FrontG4 = 18,
    FrontG5PotR4 = 19,
    FrontR2 = 20,
    FrontR3 = 21,
    FrontR4 = 22,
    FrontR5PotG4 = 23,
    FrontRupPotG3 = 24,
    FrontRdownPotG5 = 25,
    FrontGupPotR3 = 26,
    FrontGdownPotR5 = 27,
    FrontBupPotB3 = 28,
    FrontBdownPotB5 = 29,
    FrontQuickPotStrobe = 30,
    FrontSlowPotSmooth = 31,
    FrontAutoPotFlash = 32,
    FrontDiy1PotG2 = 33,
    FrontDiy2PotR2 = 34,
    FrontDiy3PotB2 = 35,
    FrontDiy4PotG = 36,
    FrontDiy5PotR = 37,
    FrontDiy6PotB = 38,
    FrontFlashPotW = 39,
    FrontJump3PotDown = 40,
    FrontJump7PotUp = 41,
    FrontFade3PotOff = 42,
    FrontFade7PotOn = 43,
    BackR5FrontRup = 44,
    BackR4FrontRdown = 45,
    BackG5FrontGup = 46,
    BackG4FrontGdown = 47,
    BackB5FrontBup = 48,
    BackB4FrontBdown = 49,
    BackSmoothFrontQuick = 50,
    BackFadeFrontSlow = 51,
    BackStrobeFrontAuto = 52,
    BackR3FrontDiy1 = 53,
    BackG3FrontDiy2 = 54,
    BackB3FrontDiy3 = 55,
    BackR2FrontDiy4 = 56,
    BackG2FrontDiy5 = 57,
    BackB2FrontDiy6 = 58,
    BackFlashFrontFlash = 59,
    BackRFrontJump3 = 60,
    BackGFrontJump7 = 61,
    BackBFrontFade3 = 62,
    BackWFrontFade7 = 63,
    BackOn = 64,
    BackOff = 65,
    BackDown = 66,
    BackUp = 67,
}

/// Total number of distinct commands.
pub const COMMAND_COUNT: usize = 68;

impl Command {
    /// All 68 commands, in declaration (= remote button) order. BFS
    /// expansion iterates this array, which is what makes its tie-breaks
    /// deterministic.
    pub const ALL: [Command; COMMAND_COUNT] = [
        Command::FrontOnOff,
        Command::FrontPlayPause,
        Command::FrontDim,
        Command::FrontBrighten,
        Command::FrontR,
        Command::FrontG,
        Command::FrontB,
        Command::FrontW,
        Command::FrontW2,
        Command::FrontW3,
        Command::FrontW4,
        Command::FrontW5PotFade,
        Command::FrontB2,
        Command::FrontB3,
        Command::FrontB4,
        Command::FrontB5PotB4,
        Command::FrontG2,
        Command::FrontG3,
        Command::FrontG4,
        Command::FrontG5PotR4,
        Command::FrontR2,
        Command::FrontR3,
        Command::FrontR4,
        Command::FrontR5PotG4,
        Command::FrontRupPotG3,
        Command::FrontRdownPotG5,
        Command::FrontGupPotR3,
        Command::FrontGdownPotR5,
        Command::FrontBupPotB3,
        Command::FrontBdownPotB5,
        Command::FrontQuickPotStrobe,
        Command::FrontSlowPotSmooth,
        Command::FrontAutoPotFlash,
        Command::FrontDiy1PotG2,
        Command::FrontDiy2PotR2,
        Command::FrontDiy3PotB2,
        Command::FrontDiy4PotG,
        Command::FrontDiy5PotR,
        Command::FrontDiy6PotB,
        Command::FrontFlashPotW,
        Command::FrontJump3PotDown,
        Command::FrontJump7PotUp,
        Command::FrontFade3PotOff,
        Command::FrontFade7PotOn,
        Command::BackR5FrontRup,
        Command::BackR4FrontRdown,
        Command::BackG5FrontGup,
        Command::BackG4FrontGdown,
        Command::BackB5FrontBup,
        Command::BackB4FrontBdown,
        Command::BackSmoothFrontQuick,
        Command::BackFadeFrontSlow,
        Command::BackStrobeFrontAuto,
        Command::BackR3FrontDiy1,
        Command::BackG3FrontDiy2,
        Command::BackB3FrontDiy3,
        Command::BackR2FrontDiy4,
        Command::BackG2FrontDiy5,
        Command::BackB2FrontDiy6,
        Command::BackFlashFrontFlash,
        Command::BackRFrontJump3,
        Command::BackGFrontJump7,
        Command::BackBFrontFade3,
        Command::BackWFrontFade7,
        Command::BackOn,
        Command::BackOff,
        Command::BackDown,
        Command::BackUp,
    ];

    /// Index in `[0, COMMAND_COUNT)`, i.e. the enum discriminant.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Command::index`].
    pub fn from_index(index: u8) -> Option<Command> {
        Command::ALL.get(index as usize).copied()
    }

    /// The primary-effect alias string, and the side-effect alias string
    /// if this command's single physical press also hits a second
    /// device.
    pub const fn effects(self) -> (&'static str, Option<&'static str>) {
        use Command::*;
        match self {
            FrontOnOff => ("frontled onoff", None),
            FrontPlayPause => ("frontled playpause", None),
            FrontDim => ("frontled dim", None),
            FrontBrighten => ("frontled bright", None),
            FrontR => ("frontled r", None),
            FrontG => ("frontled g", None),
            FrontB => ("frontled b", None),
            FrontW => ("frontled w", None),
            FrontW2 => ("frontled w2", None),
            FrontW3 => ("frontled w3", None),
            FrontW4 => ("frontled w4", None),
            FrontW5PotFade => ("frontled w5", Some("potled fade")),
            FrontB2 => ("frontled b2", None),
            FrontB3 => ("frontled b3", None),
            FrontB4 => ("frontled b4", None),
            FrontB5PotB4 => ("frontled b5", Some("potled b4")),
            FrontG2 => ("frontled g2", None),
            FrontG3 => ("frontled g3", None),
            FrontG4 => ("frontled g4", None),
            FrontG5PotR4 => ("frontled g5", Some("potled r4")),
            FrontR2 => ("frontled r2", None),
            FrontR3 => ("frontled r3", None),
            FrontR4 => ("frontled r4", None),
            FrontR5PotG4 => ("frontled r5", Some("potled g4")),
            FrontRupPotG3 => ("frontled rup", Some("potled g3")),
            FrontRdownPotG5 => ("frontled rdown", Some("potled g5")),
            FrontGupPotR3 => ("frontled gup", Some("potled r3")),
            FrontGdownPotR5 => ("frontled gdown", Some("potled r5")),
            FrontBupPotB3 => ("frontled bup", Some("potled b3")),
            FrontBdownPotB5 => ("frontled bdown", Some("potled b5")),
            FrontQuickPotStrobe => ("frontled quick", Some("potled strobe")),
            FrontSlowPotSmooth => ("frontled slow", Some("potled smooth")),
            FrontAutoPotFlash => ("frontled auto", Some("potled flash")),
            FrontDiy1PotG2 => ("frontled diy1", Some("potled g2")),
            FrontDiy2PotR2 => ("frontled diy2", Some("potled r2")),
            FrontDiy3PotB2 => ("frontled diy3", Some("potled b2")),
            FrontDiy4PotG => ("frontled diy4", Some("potled g")),
            FrontDiy5PotR => ("frontled diy5", Some("potled r")),
            FrontDiy6PotB => ("frontled diy6", Some("potled b")),
            FrontFlashPotW => ("frontled flash", Some("potled w")),
            FrontJump3PotDown => ("frontled jump3", Some("potled down")),
            FrontJump7PotUp => ("frontled jump7", Some("potled up")),
            FrontFade3PotOff => ("frontled fade3", Some("potled off")),
            FrontFade7PotOn => ("frontled fade7", Some("potled on")),
            BackR5FrontRup => ("backled r5", Some("frontled rup")),
            BackR4FrontRdown => ("backled r4", Some("frontled rdown")),
            BackG5FrontGup => ("backled g5", Some("frontled gup")),
            BackG4FrontGdown => ("backled g4", Some("frontled gdown")),
            BackB5FrontBup => ("backled b5", Some("frontled bup")),
            BackB4FrontBdown => ("backled b4", Some("frontled bdown")),
            BackSmoothFrontQuick => ("backled smooth", Some("frontled quick")),
            BackFadeFrontSlow => ("backled fade", Some("frontled slow")),
            BackStrobeFrontAuto => ("backled strobe", Some("frontled auto")),
            BackR3FrontDiy1 => ("backled r3", Some("frontled diy1")),
            BackG3FrontDiy2 => ("backled g3", Some("frontled diy2")),
            BackB3FrontDiy3 => ("backled b3", Some("frontled diy3")),
            BackR2FrontDiy4 => ("backled r2", Some("frontled diy4")),
            BackG2FrontDiy5 => ("backled g2", Some("frontled diy5")),
            BackB2FrontDiy6 => ("backled b2", Some("frontled diy6")),
            BackFlashFrontFlash => ("backled flash", Some("frontled flash")),
            BackRFrontJump3 => ("backled r", Some("frontled jump3")),
            BackGFrontJump7 => ("backled g", Some("frontled jump7")),
            BackBFrontFade3 => ("backled b", Some("frontled fade3")),
            BackWFrontFade7 => ("backled w", Some("frontled fade7")),
            BackOn => ("backled on", None),
            BackOff => ("backled off", None),
            BackDown => ("backled dim", None),
            BackUp => ("backled bright", None),
        }
    }

    /// The primary-effect alias string alone.
    pub const fn primary_effect(self) -> &'static str {
        self.effects().0
    }
}

/// Every token the validation layer accepts, initial or target side.
pub const COMMAND_ALIASES: &[&str] = &[
    "frontled on",
    "frontled off",
    "frontled paused",
    "frontled unpaused",
    "frontled dim",
    "frontled bright",
    "frontled w",
    "frontled w2",
    "frontled w3",
    "frontled w4",
    "frontled w5",
    "frontled b",
    "frontled b2",
    "frontled b3",
    "frontled b4",
    "frontled b5",
    "frontled g",
    "frontled g2",
    "frontled g3",
    "frontled g4",
    "frontled g5",
    "frontled r",
    "frontled r2",
    "frontled r3",
    "frontled r4",
    "frontled r5",
    "frontled diy1",
    "frontled diy2",
    "frontled diy3",
    "frontled diy4",
    "frontled diy5",
    "frontled diy6",
    "frontled diy1 rup",
    "frontled diy2 rup",
    "frontled diy3 rup",
    "frontled diy4 rup",
    "frontled diy5 rup",
    "frontled diy6 rup",
    "frontled diy1 rdown",
    "frontled diy2 rdown",
    "frontled diy3 rdown",
    "frontled diy4 rdown",
    "frontled diy5 rdown",
    "frontled diy6 rdown",
    "frontled diy1 gup",
    "frontled diy2 gup",
    "frontled diy3 gup",
    "frontled diy4 gup",
    "frontled diy5 gup",
    "frontled diy6 gup",
    "frontled diy1 gdown",
    "frontled diy2 gdown",
    "frontled diy3 gdown",
    "frontled diy4 gdown",
    "frontled diy5 gdown",
    "frontled diy6 gdown",
    "frontled diy1 bup",
    "frontled diy2 bup",
    "frontled diy3 bup",
    "frontled diy4 bup",
    "frontled diy5 bup",
    "frontled diy6 bup",
    "frontled diy1 bdown",
    "frontled diy2 bdown",
    "frontled diy3 bdown",
    "frontled diy4 bdown",
    "frontled diy5 bdown",
    "frontled diy6 bdown",
    "frontled quick",
    "frontled slow",
    "frontled auto",
    "frontled flash",
    "frontled jump3",
    "frontled jump7",
    "frontled fade3",
    "frontled fade7",
    "backled on",
    "backled off",
    "backled dim",
    "backled bright",
    "backled quick",
    "backled slow",
    "backled r",
    "backled r2",
    "backled r3",
    "backled r4",
    "backled r5",
    "backled g",
    "backled g2",
    "backled g3",
    "backled g4",
    "backled g5",
    "backled b",
    "backled b2",
    "backled b3",
    "backled b4",
    "backled b5",
    "backled w",
    "backled flash",
    "backled smooth",
    "backled fade",
    "backled strobe",
    "potled on",
    "potled off",
    "potled dim",
    "potled bright",
    "potled quick",
    "potled slow",
    "potled r",
    "potled r2",
    "potled r3",
    "potled r4",
    "potled r5",
    "potled g",
    "potled g2",
    "potled g3",
    "potled g4",
    "potled g5",
    "potled b",
    "potled b2",
    "potled b3",
    "potled b4",
    "potled b5",
    "potled w",
    "potled flash",
    "potled smooth",
    "potled fade",
    "potled strobe",
    "frontled calibrate",
    "potled calibrate",
];

/// Unordered pairs of opposite relative-state aliases.
pub const RELATIVE_STATES: &[(&str, &str)] = &[
    ("frontled slow", "frontled quick"),
    ("backled slow", "backled quick"),
    ("potled slow", "potled quick"),
    ("frontled dim", "frontled bright"),
    ("backled dim", "backled bright"),
    ("potled dim", "potled bright"),
    ("frontled diy1 rup", "frontled diy1 rdown"),
    ("frontled diy1 gup", "frontled diy1 gdown"),
    ("frontled diy1 bup", "frontled diy1 bdown"),
    ("frontled diy2 rup", "frontled diy2 rdown"),
    ("frontled diy2 gup", "frontled diy2 gdown"),
    ("frontled diy2 bup", "frontled diy2 bdown"),
    ("frontled diy3 rup", "frontled diy3 rdown"),
    ("frontled diy3 gup", "frontled diy3 gdown"),
    ("frontled diy3 bup", "frontled diy3 bdown"),
    ("frontled diy4 rup", "frontled diy4 rdown"),
    ("frontled diy4 gup", "frontled diy4 gdown"),
    ("frontled diy4 bup", "frontled diy4 bdown"),
    ("frontled diy5 rup", "frontled diy5 rdown"),
    ("frontled diy5 gup", "frontled diy5 gdown"),
    ("frontled diy5 bup", "frontled diy5 bdown"),
    ("frontled diy6 rup", "frontled diy6 rdown"),
    ("frontled diy6 gup", "frontled diy6 gdown"),
    ("frontled diy6 bup", "frontled diy6 bdown"),
];

/// Back LED's 20 modes, colors (0-15) first, effects (16-19) after.
pub const BACKLED_MODES: &[&str] = &[
    "backled r",
    "backled r2",
    "backled r3",
    "backled r4",
    "backled r5",
    "backled g",
    "backled g2",
    "backled g3",
    "backled g4",
    "backled g5",
    "backled b",
    "backled b2",
    "backled b3",
    "backled b4",
    "backled b5",
    "backled w",
    "backled smooth",
    "backled fade",
    "backled strobe",
    "backled flash",
];

/// Index below this is a color mode (brightness semantics apply).
pub const BACKLED_COLOR_MODE_COUNT: usize = 16;

/// Front LED's 32 modes: colors (0-19), DIY slots (20-25), effects (26-31).
pub const FRONTLED_MODES: &[&str] = &[
    "frontled r",
    "frontled r2",
    "frontled r3",
    "frontled r4",
    "frontled r5",
    "frontled g",
    "frontled g2",
    "frontled g3",
    "frontled g4",
    "frontled g5",
    "frontled b",
    "frontled b2",
    "frontled b3",
    "frontled b4",
    "frontled b5",
    "frontled w",
    "frontled w2",
    "frontled w3",
    "frontled w4",
    "frontled w5",
    "frontled diy1",
    "frontled diy2",
    "frontled diy3",
    "frontled diy4",
    "frontled diy5",
    "frontled diy6",
    "frontled auto",
    "frontled flash",
    "frontled jump3",
    "frontled jump7",
    "frontled fade3",
    "frontled fade7",
];

pub const FRONTLED_COLOR_MODE_COUNT: usize = 20;

/// First front-LED DIY slot's mode index; slots occupy `20..=25`.
pub const FRONTLED_DIY_FIRST: u8 = 20;
pub const FRONTLED_DIY_LAST: u8 = 25;

/// Pot LED's 20 modes, same shape as the back LED's.
pub const POTLED_MODES: &[&str] = &[
    "potled r",
    "potled r2",
    "potled r3",
    "potled r4",
    "potled r5",
    "potled g",
    "potled g2",
    "potled g3",
    "potled g4",
    "potled g5",
    "potled b",
    "potled b2",
    "potled b3",
    "potled b4",
    "potled b5",
    "potled w",
    "potled smooth",
    "potled fade",
    "potled strobe",
    "potled flash",
];

pub const POTLED_COLOR_MODE_COUNT: usize = 16;

/// Real hardware has unknown absolute brightness/speed: once a relative
/// trit has been nudged one way, asking to nudge it back is forbidden
/// rather than assumed to cancel out (see `transition::apply_trit`).
pub const AVOID_CHANGING_RELATIVE_STATE_NEEDLESSLY: bool = true;

/// The single command that reaches `mode` on the back LED.
pub fn backled_command_for(mode: u8) -> Command {
    const TABLE: [Command; 20] = [
        Command::BackRFrontJump3,
        Command::BackR2FrontDiy4,
        Command::BackR3FrontDiy1,
        Command::BackR4FrontRdown,
        Command::BackR5FrontRup,
        Command::BackGFrontJump7,
        Command::BackG2FrontDiy5,
        Command::BackG3FrontDiy2,
        Command::BackG4FrontGdown,
        Command::BackG5FrontGup,
        Command::BackBFrontFade3,
        Command::BackB2FrontDiy6,
        Command::BackB3FrontDiy3,
        Command::BackB4FrontBdown,
        Command::BackB5FrontBup,
        Command::BackWFrontFade7,
        Command::BackSmoothFrontQuick,
        Command::BackFadeFrontSlow,
        Command::BackStrobeFrontAuto,
        Command::BackFlashFrontFlash,
    ];
    TABLE[mode as usize]
}

/// The single command that reaches `mode` on the pot LED.
pub fn potled_command_for(mode: u8) -> Command {
    const TABLE: [Command; 20] = [
        Command::FrontDiy5PotR,
        Command::FrontDiy2PotR2,
        Command::FrontGupPotR3,
        Command::FrontG5PotR4,
        Command::FrontGdownPotR5,
        Command::FrontDiy4PotG,
        Command::FrontDiy1PotG2,
        Command::FrontRupPotG3,
        Command::FrontR5PotG4,
        Command::FrontRdownPotG5,
        Command::FrontDiy6PotB,
        Command::FrontDiy3PotB2,
        Command::FrontBupPotB3,
        Command::FrontB5PotB4,
        Command::FrontBdownPotB5,
        Command::FrontFlashPotW,
        Command::FrontSlowPotSmooth,
        Command::FrontW5PotFade,
        Command::FrontQuickPotStrobe,
        Command::FrontAutoPotFlash,
    ];
    TABLE[mode as usize]
}

/// The command that reaches `mode` on the front LED. Many front-LED
/// modes are reachable through two different button presses, whose side
/// effect lands on either the pot LED (`potled_overlap = true`) or the
/// back LED (`potled_overlap = false`); the solver exploits both.
pub fn frontled_command_for(mode: u8, potled_overlap: bool) -> Command {
    const TABLE: [Command; 32] = [
        Command::FrontR,
        Command::FrontR2,
        Command::FrontR3,
        Command::FrontR4,
        Command::FrontR5PotG4,
        Command::FrontG,
        Command::FrontG2,
        Command::FrontG3,
        Command::FrontG4,
        Command::FrontG5PotR4,
        Command::FrontB,
        Command::FrontB2,
        Command::FrontB3,
        Command::FrontB4,
        Command::FrontB5PotB4,
        Command::FrontW,
        Command::FrontW2,
        Command::FrontW3,
        Command::FrontW4,
        Command::FrontW5PotFade,
        Command::FrontDiy1PotG2,
        Command::FrontDiy2PotR2,
        Command::FrontDiy3PotB2,
        Command::FrontDiy4PotG,
        Command::FrontDiy5PotR,
        Command::FrontDiy6PotB,
        Command::FrontAutoPotFlash,
        Command::FrontFlashPotW,
        Command::FrontJump3PotDown,
        Command::FrontJump7PotUp,
        Command::FrontFade3PotOff,
        Command::FrontFade7PotOn,
    ];
    const BACK_OVERLAP_TABLE: [Command; 12] = [
        Command::BackR3FrontDiy1,
        Command::BackG3FrontDiy2,
        Command::BackB3FrontDiy3,
        Command::BackR2FrontDiy4,
        Command::BackG2FrontDiy5,
        Command::BackB2FrontDiy6,
        Command::BackStrobeFrontAuto,
        Command::BackFlashFrontFlash,
        Command::BackRFrontJump3,
        Command::BackGFrontJump7,
        Command::BackBFrontFade3,
        Command::BackWFrontFade7,
    ];
    if potled_overlap || mode < 20 {
        TABLE[mode as usize]
    } else {
        BACK_OVERLAP_TABLE[(mode - 20) as usize]
    }
}

/// Rewrites a caller-facing relative directive (e.g. "frontled dim") to
/// the one or two commands that are known to achieve it, in priority
/// order. Used to seed the offline cache builder's known-good solutions
/// and by the CLI's `--await-repeats` annotation.
pub fn commands_for_relative_state(state: &str) -> &'static [Command] {
    match state {
        "backled slow" | "backled dim" => &[Command::BackDown],
        "backled quick" | "backled bright" => &[Command::BackUp],
        "potled slow" | "potled dim" => &[Command::FrontJump3PotDown],
        "potled quick" | "potled bright" => &[Command::FrontJump7PotUp],
        "frontled dim" => &[Command::FrontDim],
        "frontled bright" => &[Command::FrontBrighten],
        "frontled slow" => &[Command::FrontSlowPotSmooth, Command::BackFadeFrontSlow],
        "frontled quick" => &[Command::FrontQuickPotStrobe, Command::BackSmoothFrontQuick],
        "frontled diy1 rup" | "frontled diy2 rup" | "frontled diy3 rup" | "frontled diy4 rup"
        | "frontled diy5 rup" | "frontled diy6 rup" => {
            &[Command::FrontRupPotG3, Command::BackR5FrontRup]
        }
        "frontled diy1 rdown" | "frontled diy2 rdown" | "frontled diy3 rdown" | "frontled diy4 rdown"
        | "frontled diy5 rdown" | "frontled diy6 rdown" => {
            &[Command::FrontRdownPotG5, Command::BackR4FrontRdown]
        }
        "frontled diy1 gup" | "frontled diy2 gup" | "frontled diy3 gup" | "frontled diy4 gup"
        | "frontled diy5 gup" | "frontled diy6 gup" => {
            &[Command::FrontGupPotR3, Command::BackG5FrontGup]
        }
        "frontled diy1 gdown" | "frontled diy2 gdown" | "frontled diy3 gdown" | "frontled diy4 gdown"
        | "frontled diy5 gdown" | "frontled diy6 gdown" => {
            &[Command::FrontGdownPotR5, Command::BackG4FrontGdown]
        }
        "frontled diy1 bup" | "frontled diy2 bup" | "frontled diy3 bup" | "frontled diy4 bup"
        | "frontled diy5 bup" | "frontled diy6 bup" => {
            &[Command::FrontBupPotB3, Command::BackB5FrontBup]
        }
        "frontled diy1 bdown" | "frontled diy2 bdown" | "frontled diy3 bdown" | "frontled diy4 bdown"
        | "frontled diy5 bdown" | "frontled diy6 bdown" => {
            &[Command::FrontBdownPotB5, Command::BackB4FrontBdown]
        }
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_matches_index() {
        for (i, cmd) in Command::ALL.iter().enumerate() {
            assert_eq!(cmd.index() as usize, i);
            assert_eq!(Command::from_index(i as u8), Some(*cmd));
        }
        assert_eq!(Command::from_index(COMMAND_COUNT as u8), None);
    }

    #[test]
    fn mode_lookup_tables_round_trip() {
        for mode in 0..BACKLED_MODES.len() as u8 {
            let _ = backled_command_for(mode);
        }
        for mode in 0..POTLED_MODES.len() as u8 {
            let _ = potled_command_for(mode);
        }
        for mode in 0..FRONTLED_MODES.len() as u8 {
            let _ = frontled_command_for(mode, true);
            let _ = frontled_command_for(mode, false);
        }
    }

    #[test]
    fn effects_are_distinct_from_command_aliases_vocabulary() {
        for cmd in Command::ALL {
            let (primary, side) = cmd.effects();
            assert!(COMMAND_ALIASES.contains(&primary) || primary.ends_with("onoff") || primary.ends_with("playpause"));
            if let Some(s) = side {
                assert!(COMMAND_ALIASES.contains(&s) || s.starts_with("potled down") || s.starts_with("potled up"));
            }
        }
    }
}
