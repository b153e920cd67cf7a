//! Mana potions lying in the world.

use bevy::math::{Rect, Vec2};

use crate::combat::hitbox::{bounds_at, overlaps, Collider};
use crate::core::{SimEvent, SoundCue};
use crate::player::Player;

pub const POTION_SIZE: Vec2 = Vec2::new(40.0, 40.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManaPotion {
    pub pos: Vec2,
}

impl Collider for ManaPotion {
    fn bounds(&self) -> Rect {
        bounds_at(self.pos, POTION_SIZE)
    }

    fn hitbox(&self) -> Rect {
        self.bounds()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pickups {
    pub potions: Vec<ManaPotion>,
}

impl Pickups {
    pub fn drop_potion(&mut self, pos: Vec2) {
        self.potions.push(ManaPotion { pos });
    }

    /// Hand every potion the player touches to the player.
    pub fn collect(&mut self, player: &mut Player, events: &mut Vec<SimEvent>) -> u32 {
        if player.is_dying() {
            return 0;
        }
        let reach = player.hitbox();
        let before = self.potions.len();
        self.potions.retain(|potion| !overlaps(potion.hitbox(), reach));

        let collected = (before - self.potions.len()) as u32;
        if collected > 0 {
            player.mana_potions += collected;
            events.push(SimEvent::Sound(SoundCue::PotionPickup));
        }
        collected
    }

    pub fn clear(&mut self) {
        self.potions.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::enemies::POTION_DROP_Y;

    use super::*;

    #[test]
    fn walking_over_a_potion_picks_it_up() {
        let mut pickups = Pickups::default();
        let mut events = Vec::new();
        let mut player = Player::new(Vec2::new(100.0, 550.0));

        pickups.drop_potion(Vec2::new(900.0, POTION_DROP_Y));
        assert_eq!(pickups.collect(&mut player, &mut events), 0);

        pickups.drop_potion(Vec2::new(160.0, POTION_DROP_Y));
        assert_eq!(pickups.collect(&mut player, &mut events), 1);
        assert_eq!(player.mana_potions, 1);
        assert_eq!(pickups.potions.len(), 1);
        assert_eq!(events, vec![SimEvent::Sound(SoundCue::PotionPickup)]);
    }
}
