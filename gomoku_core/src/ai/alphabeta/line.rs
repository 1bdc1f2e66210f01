use crate::engine::game::five_in_line;
use crate::engine::types::Color;

use super::WEIGHTS;

/// 1プレイヤー分の脅威の集計。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ThreatTally {
    /// 両端とも開いていない四（片側のみ塞がれた四）。
    blocked_four: u32,
    /// 飛び三。
    broken_three: u32,
    /// 両端が開いた四。
    open_four: u32,
    /// 三。
    open_three: u32,
    /// 二。
    open_two: u32,
    /// 五（勝ち）。
    win: u32,
}

impl ThreatTally {
    /// 片側が塞がれた四の数。
    #[inline]
    #[must_use]
    pub const fn blocked_four(&self) -> u32 {
        self.blocked_four
    }

    /// 飛び三の数。
    #[inline]
    #[must_use]
    pub const fn broken_three(&self) -> u32 {
        self.broken_three
    }

    /// 別の集計を加算する（勝ちの数も含む）。
    #[inline]
    pub const fn merge(&mut self, other: &Self) {
        self.win = self.win.saturating_add(other.win);
        self.open_four = self.open_four.saturating_add(other.open_four);
        self.blocked_four = self.blocked_four.saturating_add(other.blocked_four);
        self.open_three = self.open_three.saturating_add(other.open_three);
        self.broken_three = self.broken_three.saturating_add(other.broken_three);
        self.open_two = self.open_two.saturating_add(other.open_two);
    }

    /// 両端が開いた四の数。
    #[inline]
    #[must_use]
    pub const fn open_four(&self) -> u32 {
        self.open_four
    }

    /// 三の数。
    #[inline]
    #[must_use]
    pub const fn open_three(&self) -> u32 {
        self.open_three
    }

    /// 二の数。
    #[inline]
    #[must_use]
    pub const fn open_two(&self) -> u32 {
        self.open_two
    }

    /// `[win, open_four, blocked_four, open_three, broken_three, open_two]` の順で返す。
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u32; 6] {
        [
            self.win,
            self.open_four,
            self.blocked_four,
            self.open_three,
            self.broken_three,
            self.open_two,
        ]
    }

    /// 勝ち以外の脅威を重み付けして合計する。
    #[inline]
    #[must_use]
    pub fn weighted(&self) -> f64 {
        let counts = [
            self.open_four,
            self.blocked_four,
            self.open_three,
            self.broken_three,
            self.open_two,
        ];
        counts
            .iter()
            .zip(WEIGHTS.iter())
            .map(|(&count, &weight)| f64::from(count) * weight)
            .sum()
    }

    /// 五（勝ち）の数。
    #[inline]
    #[must_use]
    pub const fn win(&self) -> u32 {
        self.win
    }
}

/// 1本のラインから得た白黒それぞれの脅威。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LineThreats {
    /// 黒の脅威。
    black: ThreatTally,
    /// 白の脅威。
    white: ThreatTally,
}

impl LineThreats {
    /// 黒の脅威を返す。
    #[inline]
    #[must_use]
    pub const fn black(&self) -> &ThreatTally {
        &self.black
    }

    /// 指定色の集計への可変参照を返す。
    const fn tally_mut(&mut self, color: Color) -> &mut ThreatTally {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// 白の脅威を返す。
    #[inline]
    #[must_use]
    pub const fn white(&self) -> &ThreatTally {
        &self.white
    }

    /// 指定色の勝ちだけを持つ結果を返す。
    fn win_for(color: Color) -> Self {
        let mut threats = Self::default();
        threats.tally_mut(color).win = 1;
        threats
    }
}

/// セル値の合計を返す。
fn window_sum(window: &[i8]) -> i32 {
    window.iter().map(|&value| i32::from(value)).sum()
}

/// 合計値が `±target` なら対応する色を返す。
const fn color_of_sum(sum: i32, target: i32) -> Option<Color> {
    if sum == target {
        Some(Color::White)
    } else if sum == target.wrapping_neg() {
        Some(Color::Black)
    } else {
        None
    }
}

/// 1本のライン（行・列・斜め）の脅威を分類する。
///
/// 五が見つかった時点でその色の勝ちだけを返し、残りの走査は行わない。
/// それ以外は 四 → 三 → 二 の各走査を独立に行い、同じラインが複数の分類に数えられることがある。
#[must_use]
pub fn evaluate_line(line: &[i8]) -> LineThreats {
    if let Some(color) = five_in_line(line) {
        return LineThreats::win_for(color);
    }

    let mut threats = LineThreats::default();
    scan_fours(line, &mut threats);
    scan_threes(line, &mut threats);
    scan_twos(line, &mut threats);
    threats
}

/// 四（4連）を探し、塞がれている側の数で分類する。
///
/// 相手の石に接する側と盤外にはみ出す側（`n == 0` と `n + 4 == len`）を塞がれた側として数える。
/// さらに `n == len - 5` の窓は、終端側の隣が空いていても1側塞がれているとみなす。
fn scan_fours(line: &[i8], threats: &mut LineThreats) {
    let len = line.len();
    for (n, window) in line.windows(4).enumerate() {
        let Some(color) = color_of_sum(window_sum(window), 4) else {
            continue;
        };
        let opponent = color.opponent().sign();

        let before = n
            .checked_sub(1)
            .and_then(|index| line.get(index))
            .is_some_and(|&value| value == opponent);
        let after = line
            .get(n.wrapping_add(4))
            .is_some_and(|&value| value == opponent);
        let at_start = n == 0;
        let at_end = n.wrapping_add(4) == len;
        let near_end = len.checked_sub(5) == Some(n);

        let closed = [before, after, at_start, at_end, near_end]
            .into_iter()
            .filter(|&side| side)
            .count();
        let tally = threats.tally_mut(color);
        match closed {
            0 => tally.open_four = tally.open_four.saturating_add(1),
            1 => tally.blocked_four = tally.blocked_four.saturating_add(1),
            _ => {}
        }
    }
}

/// 三（4マス中3石、相手の石なし、両隣の合計が0）を探す。
///
/// 内側2マスが両方とも自分の石なら三、そうでなければ飛び三。
fn scan_threes(line: &[i8], threats: &mut LineThreats) {
    let len = line.len();
    for n in 1..len.saturating_sub(4) {
        let Some(window) = line.get(n..n.wrapping_add(4)) else {
            continue;
        };
        let Some(color) = color_of_sum(window_sum(window), 3) else {
            continue;
        };
        let opponent = color.opponent().sign();
        if window.contains(&opponent) {
            continue;
        }

        let before = line.get(n.wrapping_sub(1)).copied().unwrap_or(0);
        let after = line.get(n.wrapping_add(4)).copied().unwrap_or(0);
        if i32::from(before).wrapping_add(i32::from(after)) != 0 {
            continue;
        }

        let solid = window
            .get(1..3)
            .is_some_and(|inner| inner.iter().all(|&value| value == color.sign()));
        let tally = threats.tally_mut(color);
        if solid {
            tally.open_three = tally.open_three.saturating_add(1);
        } else {
            tally.broken_three = tally.broken_three.saturating_add(1);
        }
    }
}

/// 二（隣接する2石で、前後1マスずつ広げた窓の合計も同じ）を探す。
///
/// 窓の右端はラインの終端で切り詰める。先頭（前のマスが無い位置）は数えない。
fn scan_twos(line: &[i8], threats: &mut LineThreats) {
    let len = line.len();
    for n in 1..len.saturating_sub(1) {
        let Some(pair) = line.get(n..n.wrapping_add(2)) else {
            continue;
        };
        let Some(color) = color_of_sum(window_sum(pair), 2) else {
            continue;
        };

        let end = n.wrapping_add(3).min(len);
        let Some(wide) = line.get(n.wrapping_sub(1)..end) else {
            continue;
        };
        if color_of_sum(window_sum(wide), 2) == Some(color) {
            let tally = threats.tally_mut(color);
            tally.open_two = tally.open_two.saturating_add(1);
        }
    }
}
