use crate::gem::Gem;
use crate::gems::Gems;
use std::collections::HashSet;

/// Every way to choose `num_chosen` *distinct* colors out of the positive
/// slots of `gems`, each contributing exactly one unit. Used to generate
/// different-color Collect takes.
pub fn choose_distinct_gems(gems: &mut Gems, running: &mut Gems, num_chosen: u32) -> HashSet<Gems> {
    let mut total_choices = HashSet::new();
    if num_chosen == 0 {
        total_choices.insert(*running);
        return total_choices;
    }

    for color in Gem::all_expect_gold() {
        if gems[color] > 0 && running[color] == 0 {
            gems[color] -= 1;
            running[color] += 1;

            total_choices.extend(choose_distinct_gems(gems, running, num_chosen - 1));

            running[color] -= 1;
            gems[color] += 1;
        }
    }

    total_choices
}

/// Every way to choose `num_chosen` units total from `gems`, any color
/// repeated up to its available count. Used to generate forced-Return
/// combinations over held (non-gold) colors.
pub fn choose_gems(gems: &mut Gems, running: &mut Gems, num_chosen: u32) -> HashSet<Gems> {
    let mut total_choices = HashSet::new();
    if num_chosen == 0 {
        total_choices.insert(*running);
        return total_choices;
    }

    for color in Gem::all() {
        if gems[color] > 0 {
            gems[color] -= 1;
            running[color] += 1;

            total_choices.extend(choose_gems(gems, running, num_chosen - 1));

            running[color] -= 1;
            gems[color] += 1;
        }
    }

    total_choices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_take_from_two_nonempty_colors_is_exactly_one_combo() {
        let mut gems = Gems::empty();
        gems[Gem::Onyx] = 4;
        gems[Gem::Sapphire] = 4;

        let combos = choose_distinct_gems(&mut gems, &mut Gems::empty(), 2);
        assert_eq!(combos.len(), 1);
        let combo = combos.into_iter().next().unwrap();
        assert_eq!(combo[Gem::Onyx], 1);
        assert_eq!(combo[Gem::Sapphire], 1);
    }

    #[test]
    fn choose_gems_respects_available_counts() {
        let mut gems = Gems::empty();
        gems[Gem::Onyx] = 2;
        gems[Gem::Sapphire] = 1;

        let combos = choose_gems(&mut gems, &mut Gems::empty(), 2);
        for combo in &combos {
            assert!(combo[Gem::Onyx] <= 2);
            assert!(combo[Gem::Sapphire] <= 1);
            assert_eq!(combo.total(), 2);
        }
        assert!(combos.contains(&{
            let mut g = Gems::empty();
            g[Gem::Onyx] = 2;
            g
        }));
    }
}
