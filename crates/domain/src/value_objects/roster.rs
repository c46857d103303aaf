//! Ordered list of seated players.
//!
//! Seats are always compact: clearing a seat shifts every later player one
//! position to the left, so index `i` is filled iff `i < len()`.

use serde::{Deserialize, Serialize};

use crate::entities::User;
use crate::ids::UserId;
use crate::value_objects::PlayerBounds;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerRoster(Vec<UserId>);

impl PlayerRoster {
    pub fn new(players: impl IntoIterator<Item = UserId>) -> Self {
        let mut roster = Self(Vec::new());
        roster.compact(players.into_iter().map(Some));
        roster
    }

    /// Roster for a freshly opened form: the host alone.
    pub fn seeded(host: UserId) -> Self {
        Self(vec![host])
    }

    /// Put `player` into `slot`, or clear the slot with `None`.
    ///
    /// A slot past the end can only append. The roster is compacted
    /// afterwards; duplicate ids keep their first seat.
    pub fn assign(&mut self, slot: usize, player: Option<UserId>) {
        let mut seats: Vec<Option<UserId>> = self.0.iter().copied().map(Some).collect();
        match seats.get_mut(slot) {
            Some(seat) => *seat = player,
            None => seats.push(player),
        }
        self.compact(seats);
    }

    fn compact(&mut self, seats: impl IntoIterator<Item = Option<UserId>>) {
        let mut players: Vec<UserId> = Vec::new();
        for id in seats.into_iter().flatten() {
            if !players.contains(&id) {
                players.push(id);
            }
        }
        self.0 = players;
    }

    pub fn get(&self, slot: usize) -> Option<UserId> {
        self.0.get(slot).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.0.contains(&id)
    }

    pub fn as_slice(&self) -> &[UserId] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<UserId> {
        self.0.clone()
    }

    /// A seat selector is offered when the seat is filled, when it is the
    /// first free seat after a filled one, or when the game requires it.
    pub fn is_slot_visible(&self, slot: usize, bounds: &PlayerBounds) -> bool {
        if slot >= bounds.max() {
            return false;
        }
        let filled = self.get(slot).is_some();
        let follows_filled = slot > 0 && self.get(slot - 1).is_some();
        filled || follows_filled || bounds.requires(slot)
    }

    /// Users selectable for `slot`: everyone not already seated elsewhere.
    pub fn candidates<'a>(&self, slot: usize, users: &'a [User]) -> Vec<&'a User> {
        let current = self.get(slot);
        users
            .iter()
            .filter(|user| Some(user.id) == current || !self.contains(user.id))
            .collect()
    }
}

impl From<PlayerRoster> for Vec<UserId> {
    fn from(roster: PlayerRoster) -> Self {
        roster.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<UserId> {
        raw.iter().copied().map(UserId::new).collect()
    }

    fn users() -> Vec<User> {
        vec![
            User::new(UserId::new(1), "Ann"),
            User::new(UserId::new(2), "Bo"),
            User::new(UserId::new(3), "Cy"),
        ]
    }

    #[test]
    fn clearing_a_middle_slot_shifts_later_players_left() {
        let mut roster = PlayerRoster::new(ids(&[1, 2, 3]));
        roster.assign(1, None);
        assert_eq!(roster.as_slice(), ids(&[1, 3]).as_slice());
    }

    #[test]
    fn assigning_past_the_end_appends_without_gaps() {
        let mut roster = PlayerRoster::seeded(UserId::new(1));
        roster.assign(3, Some(UserId::new(2)));
        assert_eq!(roster.as_slice(), ids(&[1, 2]).as_slice());
    }

    #[test]
    fn assigning_far_past_the_end_appends() {
        let mut roster = PlayerRoster::seeded(UserId::new(1));
        roster.assign(usize::MAX, Some(UserId::new(2)));
        assert_eq!(roster.as_slice(), ids(&[1, 2]).as_slice());

        roster.assign(usize::MAX, None);
        assert_eq!(roster.as_slice(), ids(&[1, 2]).as_slice());
    }

    #[test]
    fn replacing_a_slot_keeps_order() {
        let mut roster = PlayerRoster::new(ids(&[1, 2]));
        roster.assign(1, Some(UserId::new(3)));
        assert_eq!(roster.as_slice(), ids(&[1, 3]).as_slice());
    }

    #[test]
    fn duplicate_ids_keep_their_first_seat() {
        let mut roster = PlayerRoster::new(ids(&[1, 2]));
        roster.assign(2, Some(UserId::new(1)));
        assert_eq!(roster.as_slice(), ids(&[1, 2]).as_slice());
        assert_eq!(PlayerRoster::new(ids(&[2, 2, 3])).len(), 2);
    }

    #[test]
    fn candidates_exclude_players_seated_elsewhere() {
        let roster = PlayerRoster::new(ids(&[1, 2]));
        let all = users();

        let slot0: Vec<UserId> = roster.candidates(0, &all).iter().map(|u| u.id).collect();
        assert_eq!(slot0, ids(&[1, 3]));

        let slot2: Vec<UserId> = roster.candidates(2, &all).iter().map(|u| u.id).collect();
        assert_eq!(slot2, ids(&[3]));
    }

    #[test]
    fn visible_slots_cover_required_filled_and_next_free() {
        let bounds = PlayerBounds::new(2, 4).expect("valid bounds");
        let roster = PlayerRoster::new(ids(&[1, 2]));
        let visible: Vec<usize> = (0..bounds.max())
            .filter(|slot| roster.is_slot_visible(*slot, &bounds))
            .collect();
        assert_eq!(visible, vec![0, 1, 2]);

        let lonely = PlayerRoster::seeded(UserId::new(1));
        let visible: Vec<usize> = (0..bounds.max())
            .filter(|slot| lonely.is_slot_visible(*slot, &bounds))
            .collect();
        assert_eq!(visible, vec![0, 1]);
    }
}
