use strum::{Display, FromRepr};

const TYPE_MONSTER: u32 = 0x1;

/// Type bits in the order they are printed. The first three are the card frame.
const TYPE_FLAGS: [(u32, &str); 25] = [
    (TYPE_MONSTER, "Monster"),
    (0x2, "Spell"),
    (0x4, "Trap"),
    (0x10, "Normal"),
    (0x20, "Effect"),
    (0x40, "Fusion"),
    (0x80, "Ritual"),
    (0x100, "Trap Monster"),
    (0x200, "Spirit"),
    (0x400, "Union"),
    (0x800, "Gemini"),
    (0x1000, "Tuner"),
    (0x2000, "Synchro"),
    (0x4000, "Token"),
    (0x10000, "Quick-Play"),
    (0x20000, "Continuous"),
    (0x40000, "Equip"),
    (0x80000, "Field"),
    (0x100000, "Counter"),
    (0x200000, "Flip"),
    (0x400000, "Toon"),
    (0x800000, "Xyz"),
    (0x1000000, "Pendulum"),
    (0x2000000, "Special Summon"),
    (0x4000000, "Link"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, FromRepr, Display)]
#[repr(u32)]
pub enum Attribute {
    #[strum(to_string = "EARTH")]
    Earth = 0x01,
    #[strum(to_string = "WATER")]
    Water = 0x02,
    #[strum(to_string = "FIRE")]
    Fire = 0x04,
    #[strum(to_string = "WIND")]
    Wind = 0x08,
    #[strum(to_string = "LIGHT")]
    Light = 0x10,
    #[strum(to_string = "DARK")]
    Dark = 0x20,
    #[strum(to_string = "DIVINE")]
    Divine = 0x40,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, FromRepr, Display)]
#[repr(u32)]
pub enum Race {
    Warrior = 0x1,
    Spellcaster = 0x2,
    Fairy = 0x4,
    Fiend = 0x8,
    Zombie = 0x10,
    Machine = 0x20,
    Aqua = 0x40,
    Pyro = 0x80,
    Rock = 0x100,
    #[strum(to_string = "Winged Beast")]
    WingedBeast = 0x200,
    Plant = 0x400,
    Insect = 0x800,
    Thunder = 0x1000,
    Dragon = 0x2000,
    Beast = 0x4000,
    #[strum(to_string = "Beast-Warrior")]
    BeastWarrior = 0x8000,
    Dinosaur = 0x10000,
    Fish = 0x20000,
    #[strum(to_string = "Sea Serpent")]
    SeaSerpent = 0x40000,
    Reptile = 0x80000,
    Psychic = 0x100000,
    #[strum(to_string = "Divine-Beast")]
    DivineBeast = 0x200000,
    #[strum(to_string = "Creator God")]
    CreatorGod = 0x400000,
    Wyrm = 0x800000,
    Cyberse = 0x1000000,
    Illusion = 0x2000000,
}

pub fn is_monster(type_code: u32) -> bool {
    type_code & TYPE_MONSTER != 0
}

/// Joins the names of every known bit set in `type_code` with `|`.
pub fn type_name(type_code: u32) -> String {
    let names: Vec<_> = TYPE_FLAGS
        .iter()
        .filter(|(flag, _)| type_code & flag != 0)
        .map(|(_, name)| *name)
        .collect();

    if names.is_empty() {
        unknown(type_code)
    } else {
        names.join("|")
    }
}

pub fn race_name(race_code: u32) -> String {
    Race::from_repr(race_code).map_or_else(|| unknown(race_code), |race| race.to_string())
}

pub fn attribute_name(attribute_code: u32) -> String {
    Attribute::from_repr(attribute_code)
        .map_or_else(|| unknown(attribute_code), |attribute| attribute.to_string())
}

/// Level, rank or link rating stored in the low byte of the packed level field.
pub fn level(level_field: u32) -> u32 {
    level_field & 0xff
}

/// ATK/DEF as printed on the card, `-2` is the catalog's marker for `?`.
pub fn stat(value: i32) -> String {
    match value {
        -2 => "?".to_string(),
        value => value.to_string(),
    }
}

fn unknown(code: u32) -> String {
    format!("Unknown ({code})")
}
