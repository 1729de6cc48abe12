use crate::agent::weighted_sample;
use crate::card::CARD_TABLE;
use crate::game_state::GameState;
use crate::gem::Gem;
use crate::gems::Gems;
use crate::mv::Move;
use crate::runner::Agent;
use rand::RngCore;

#[derive(Debug, Clone, Copy)]
pub struct SmartOptions {
    pub near_term_cost_threshold: u32,
    pub purchase_for_development_card_weight: u64,
    pub purchase_for_noble_card_weight: u64,
    pub purchase_for_points_weight: u64,
}

impl Default for SmartOptions {
    fn default() -> SmartOptions {
        SmartOptions {
            near_term_cost_threshold: 3,
            purchase_for_development_card_weight: 2,
            purchase_for_noble_card_weight: 0,
            purchase_for_points_weight: 100,
        }
    }
}

/// The default rollout policy: biases collects towards colors that would
/// soon complete an affordable card, and biases purchases towards cheap,
/// noble-relevant, high-point cards.
pub struct Smart {
    options: SmartOptions,
}

impl Smart {
    pub fn new(options: SmartOptions) -> Smart {
        Smart { options }
    }

    fn card_cost(&self, state: &GameState) -> Gems {
        let mover = &state.players()[state.next_player()];
        let purchase_power = *mover.developments() + *mover.gems();

        let mut card_costs = Gems::empty();
        let mut add_card = |card_id: Option<crate::card::CardId>| {
            let Some(card_id) = card_id else { return };
            let card = CARD_TABLE[card_id as usize];
            let residual = Gems::apply_discount(&card.cost().to_gems(), &purchase_power);
            if residual.total() + mover.gems()[Gem::Gold] as u32 <= self.options.near_term_cost_threshold {
                card_costs += residual;
            }
        };

        for row in state.board() {
            for slot in row {
                add_card(*slot);
            }
        }
        for slot in mover.reserved() {
            add_card(slot.and_then(|rc| rc.card_id()));
        }

        card_costs
    }

    fn noble_cost(&self, state: &GameState) -> Gems {
        let catalog = crate::nobles::Noble::all();
        state
            .nobles()
            .iter()
            .filter_map(|slot| *slot)
            .fold(Gems::empty(), |acc, id| acc + *catalog[id as usize].requirements())
    }

    fn select_collect(&self, moves: &[&Move], card_cost: &Gems, rng: &mut dyn RngCore) -> Move {
        let weights: Vec<u64> = moves
            .iter()
            .map(|mv| {
                let Move::Collect(take) = mv else { unreachable!() };
                let mut weight = 1u64;
                for color in Gem::all_expect_gold() {
                    weight += take[color] as u64 * card_cost[color] as u64;
                }
                weight
            })
            .collect();
        *moves[weighted_sample(&weights, rng)]
    }

    fn select_purchase(&self, moves: &[&Move], card_cost: &Gems, noble_cost: &Gems, rng: &mut dyn RngCore) -> Move {
        let weights: Vec<u64> = moves
            .iter()
            .map(|mv| {
                let Move::Purchase { card, .. } = mv else { unreachable!() };
                let info = CARD_TABLE[*card as usize];
                let mut weight = 1u64;
                weight += card_cost[info.gem()] as u64 * self.options.purchase_for_development_card_weight;
                weight += noble_cost[info.gem()] as u64 * self.options.purchase_for_noble_card_weight;
                weight += info.points() as u64 * self.options.purchase_for_points_weight;
                weight
            })
            .collect();
        *moves[weighted_sample(&weights, rng)]
    }
}

impl Agent for Smart {
    fn on_setup(&mut self, _state: &GameState, _seat_id: usize) {}

    fn on_turn(&mut self, state: &GameState, moves: &[Move], rng: &mut dyn RngCore) -> Move {
        let card_cost = self.card_cost(state);
        let noble_cost = self.noble_cost(state);

        let purchase: Vec<&Move> = moves.iter().filter(|mv| matches!(mv, Move::Purchase { .. })).collect();
        let collect: Vec<&Move> = moves.iter().filter(|mv| matches!(mv, Move::Collect(_))).collect();

        let mover = &state.players()[state.next_player()];
        let held_non_gold: u32 = Gem::all_expect_gold().into_iter().map(|color| mover.gems()[color] as u32).sum();
        let collect_take_is_three = collect
            .first()
            .map(|mv| matches!(mv, Move::Collect(gems) if gems.total() == 3))
            .unwrap_or(false);

        if !collect.is_empty() && held_non_gold <= 7 && collect_take_is_three {
            return self.select_collect(&collect, &card_cost, rng);
        }

        if !purchase.is_empty() {
            return self.select_purchase(&purchase, &card_cost, &noble_cost, rng);
        }

        let collect_nonempty = collect
            .first()
            .map(|mv| matches!(mv, Move::Collect(gems) if gems.total() > 0))
            .unwrap_or(false);
        if !collect.is_empty() && collect_nonempty {
            return self.select_collect(&collect, &card_cost, rng);
        }

        use rand::Rng;
        moves[rng.gen_range(0..moves.len())]
    }
}
