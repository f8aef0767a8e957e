use crate::quoridor::prelude::*;

impl Board {
    /// Applies an action onto the board unchecked; engine use only.
    pub(super) fn apply(&mut self, action: Action) -> () {
        match action {
            Action::Move(to) => {
                self.pawns[self.player_to_move.index()] = to;
            },
            Action::Fence(placing) => {
                self.fences_left[self.player_to_move.index()] -= 1;
                self.placed.insert(&placing.id());
                self.valid_placings.difference_inplace(&placing.conflicts());
                self.sever(&placing);
            }
        };
        self.history.push(action);
        self.next_player();
    }

    pub(super) fn next_player(&mut self) -> () {
        self.player_to_move = -self.player_to_move;
    }

    /// Returns the destinations a player's pawn may step to this turn: open
    /// orthogonal neighbours, with the jump rules when the enemy pawn stands
    /// in the way. A straight jump needs the far edge open; otherwise the
    /// pawn may step aside to any cell open from the enemy's square.
    pub fn valid_pawn_moves(&self, player: Player) -> Vec<Coord> {
        let own = *self.pawn(player);
        let enemy = *self.pawn(-player);
        let mut destinations = vec![];

        for offset in coords::ORTHOGONAL_OFFSETS.iter() {
            let shifted = own + offset;
            if !shifted.in_bounds_signed() {
                continue;
            }
            let step = shifted.coerce();
            if !self.open(&own, &step) {
                continue;
            }
            if step != enemy {
                destinations.push(step);
                continue;
            }

            // The enemy pawn occupies the square; try to vault it.
            let vault = enemy + offset;
            if vault.in_bounds_signed() && self.open(&enemy, &vault.coerce()) {
                destinations.push(vault.coerce());
                continue;
            }

            // Straight jump walled off; side-step anywhere open off the
            // enemy's square instead.
            for side in coords::ORTHOGONAL_OFFSETS.iter() {
                let aside = enemy + side;
                if aside.in_bounds_signed() && self.open(&enemy, &aside.coerce()) && aside.coerce() != own {
                    destinations.push(aside.coerce());
                }
            }
        }

        destinations
    }
}
