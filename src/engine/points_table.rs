//! Таблица очков игры 2/9/16.
//!
//! На лунке игроки ранжируются по ударам (меньше = лучше) и получают очки
//! за занятое место:
//!   - 2 игрока: 2, 0
//!   - 3 игрока: 5, 3, 1
//!   - 4 игрока: 7, 5, 3, 1
//!
//! Игроки с одинаковым числом ударов делят очки своих мест поровну.
//! Все таблицы — арифметические прогрессии с шагом 2, поэтому среднее по
//! любому отрезку мест целое.

use std::collections::BTreeMap;

use crate::domain::{HoleScore, PlayerId};

/// Очки за места для заданного числа игроков на лунке.
pub fn place_points(players_on_hole: usize) -> &'static [i64] {
    match players_on_hole {
        2 => &[2, 0],
        3 => &[5, 3, 1],
        4 => &[7, 5, 3, 1],
        _ => &[],
    }
}

/// Очки всех игроков за одну лунку по их ударам.
///
/// Меньше двух игроков или неподдерживаемый размер группы — лунка не
/// приносит очков никому.
pub fn award_hole(strokes: &BTreeMap<PlayerId, u32>) -> BTreeMap<PlayerId, i64> {
    let table = place_points(strokes.len());
    if table.is_empty() {
        return strokes.keys().map(|p| (*p, 0)).collect();
    }

    let mut ranked: Vec<(PlayerId, u32)> = strokes.iter().map(|(p, s)| (*p, *s)).collect();
    ranked.sort_by_key(|&(p, s)| (s, p));

    let mut awarded = BTreeMap::new();
    let mut place = 0;
    while place < ranked.len() {
        let strokes_here = ranked[place].1;
        let tied = ranked[place..]
            .iter()
            .take_while(|(_, s)| *s == strokes_here)
            .count();

        let shared: i64 = table[place..place + tied].iter().sum();
        let each = shared / tied as i64;
        for &(player, _) in &ranked[place..place + tied] {
            awarded.insert(player, each);
        }

        place += tied;
    }

    awarded
}

/// Перевести удары по лункам в очки по лункам.
pub fn strokes_to_points(holes: &[HoleScore<u32>]) -> Vec<HoleScore<i64>> {
    holes
        .iter()
        .map(|h| HoleScore {
            hole: h.hole,
            entries: award_hole(&h.entries),
        })
        .collect()
}
