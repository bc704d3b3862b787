//! Heavenly stems and earthly branches.
//!
//! The two cyclic symbol sequences of the sexagenary calendar: ten heavenly
//! stems and twelve earthly branches. Both are totally ordered and cyclic;
//! construction from an arbitrary integer index reduces modulo the sequence
//! length.

use serde::{Deserialize, Serialize};

/// One of the ten heavenly stems (天干).
///
/// Ordered from Jia (甲, index 0) to Gui (癸, index 9). The sequence is
/// cyclic: [`HeavenlyStem::from_index`] reduces its argument modulo 10.
///
/// # Example
///
/// ```
/// use bazi_engine::models::HeavenlyStem;
///
/// assert_eq!(HeavenlyStem::from_index(0), HeavenlyStem::Jia);
/// assert_eq!(HeavenlyStem::from_index(15), HeavenlyStem::Ji);
/// assert_eq!(HeavenlyStem::Jia.symbol(), "甲");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeavenlyStem {
    /// 甲, index 0.
    Jia,
    /// 乙, index 1.
    Yi,
    /// 丙, index 2.
    Bing,
    /// 丁, index 3.
    Ding,
    /// 戊, index 4.
    Wu,
    /// 己, index 5.
    Ji,
    /// 庚, index 6.
    Geng,
    /// 辛, index 7.
    Xin,
    /// 壬, index 8.
    Ren,
    /// 癸, index 9.
    Gui,
}

impl HeavenlyStem {
    /// All ten stems in cycle order.
    pub const ALL: [HeavenlyStem; 10] = [
        HeavenlyStem::Jia,
        HeavenlyStem::Yi,
        HeavenlyStem::Bing,
        HeavenlyStem::Ding,
        HeavenlyStem::Wu,
        HeavenlyStem::Ji,
        HeavenlyStem::Geng,
        HeavenlyStem::Xin,
        HeavenlyStem::Ren,
        HeavenlyStem::Gui,
    ];

    /// Returns the stem at the given position, reducing modulo 10.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 10]
    }

    /// Returns the stem's position in the ten-stem sequence (0-9).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the stem's Chinese character.
    pub fn symbol(&self) -> &'static str {
        const SYMBOLS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
        SYMBOLS[self.index()]
    }

    /// Returns the stem's pinyin name.
    pub fn name(&self) -> &'static str {
        const NAMES: [&str; 10] = [
            "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
        ];
        NAMES[self.index()]
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One of the twelve earthly branches (地支).
///
/// Ordered from Zi (子, index 0) to Hai (亥, index 11). Each branch is also
/// associated with a two-hour window of the day, with the Zi window wrapping
/// across midnight (23:00-00:59).
///
/// # Example
///
/// ```
/// use bazi_engine::models::EarthlyBranch;
///
/// assert_eq!(EarthlyBranch::from_index(0), EarthlyBranch::Zi);
/// assert_eq!(EarthlyBranch::from_index(15), EarthlyBranch::Mao);
/// assert_eq!(EarthlyBranch::Yin.symbol(), "寅");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarthlyBranch {
    /// 子 (Rat), index 0.
    Zi,
    /// 丑 (Ox), index 1.
    Chou,
    /// 寅 (Tiger), index 2.
    Yin,
    /// 卯 (Rabbit), index 3.
    Mao,
    /// 辰 (Dragon), index 4.
    Chen,
    /// 巳 (Snake), index 5.
    Si,
    /// 午 (Horse), index 6.
    Wu,
    /// 未 (Goat), index 7.
    Wei,
    /// 申 (Monkey), index 8.
    Shen,
    /// 酉 (Rooster), index 9.
    You,
    /// 戌 (Dog), index 10.
    Xu,
    /// 亥 (Pig), index 11.
    Hai,
}

impl EarthlyBranch {
    /// All twelve branches in cycle order.
    pub const ALL: [EarthlyBranch; 12] = [
        EarthlyBranch::Zi,
        EarthlyBranch::Chou,
        EarthlyBranch::Yin,
        EarthlyBranch::Mao,
        EarthlyBranch::Chen,
        EarthlyBranch::Si,
        EarthlyBranch::Wu,
        EarthlyBranch::Wei,
        EarthlyBranch::Shen,
        EarthlyBranch::You,
        EarthlyBranch::Xu,
        EarthlyBranch::Hai,
    ];

    /// Returns the branch at the given position, reducing modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Returns the branch's position in the twelve-branch sequence (0-11).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the branch's Chinese character.
    pub fn symbol(&self) -> &'static str {
        const SYMBOLS: [&str; 12] = [
            "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
        ];
        SYMBOLS[self.index()]
    }

    /// Returns the branch's pinyin name.
    pub fn name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
        ];
        NAMES[self.index()]
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
