use crate::config::{Board, FOOD_COLLISION_DISTANCE, SELF_COLLISION_TOLERANCE};
use crate::food::Food;
use crate::snake::Snake;

/// Classified outcome of one tick's collision check.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Verdict {
    /// The head reached the food's cell.
    Food,
    /// The head left the board.
    Wall,
    /// The head ran into a non-head segment.
    SelfHit,
    /// Nothing happened this tick.
    None,
}

/// Classifies the post-move state against food, walls, and the body.
///
/// Checks run in a fixed priority order and only the first hit is reported:
/// food before wall before self. Eating and dying are mutually exclusive
/// within one tick, and a head that lands on the food cell scores even if
/// that cell were somehow also out of bounds.
#[must_use]
pub fn classify(snake: &Snake, food: &Food, board: Board) -> Verdict {
    if snake.head_distance_to(food.position) < FOOD_COLLISION_DISTANCE {
        return Verdict::Food;
    }

    let head = snake.head();
    if !board.contains(head) {
        return Verdict::Wall;
    }

    let bitten = snake
        .segments()
        .skip(1)
        .any(|segment| head.distance_to(*segment) < SELF_COLLISION_TOLERANCE);
    if bitten {
        return Verdict::SelfHit;
    }

    Verdict::None
}

#[cfg(test)]
mod tests {
    use crate::config::Board;
    use crate::food::Food;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{classify, Verdict};

    fn far_food() -> Food {
        Food::at(Position { x: 280, y: 280 })
    }

    #[test]
    fn head_on_food_cell_is_a_food_verdict() {
        let snake = Snake::from_segments(
            vec![
                Position { x: 20, y: 0 },
                Position { x: 0, y: 0 },
                Position { x: -20, y: 0 },
            ],
            Direction::Right,
        );
        let food = Food::at(Position { x: 20, y: 0 });

        assert_eq!(classify(&snake, &food, Board::standard()), Verdict::Food);
    }

    #[test]
    fn adjacent_cell_does_not_count_as_food() {
        let snake = Snake::from_segments(vec![Position { x: 0, y: 0 }], Direction::Right);
        let food = Food::at(Position { x: 20, y: 0 });

        assert_eq!(classify(&snake, &food, Board::standard()), Verdict::None);
    }

    #[test]
    fn head_beyond_half_extent_is_a_wall_verdict() {
        let board = Board::standard();

        for head in [
            Position { x: 400, y: 0 },
            Position { x: -400, y: 0 },
            Position { x: 0, y: 400 },
            Position { x: 0, y: -400 },
        ] {
            let snake = Snake::from_segments(vec![head], Direction::Right);
            assert_eq!(classify(&snake, &far_food(), board), Verdict::Wall);
        }
    }

    #[test]
    fn head_on_the_wall_line_is_still_in_play() {
        let snake = Snake::from_segments(vec![Position { x: 380, y: 0 }], Direction::Right);

        assert_eq!(
            classify(&snake, &far_food(), Board::standard()),
            Verdict::None,
        );
    }

    #[test]
    fn head_on_a_body_segment_is_a_self_verdict() {
        // Head has looped back onto the fourth segment.
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 20, y: 0 },
                Position { x: 20, y: 20 },
                Position { x: 0, y: 20 },
                Position { x: 0, y: 0 },
            ],
            Direction::Down,
        );

        assert_eq!(
            classify(&snake, &far_food(), Board::standard()),
            Verdict::SelfHit,
        );
    }

    #[test]
    fn food_wins_over_a_simultaneous_wall_exceedance() {
        // Both conditions true at once: the head is off the board and on
        // the food's cell. Food is checked first.
        let snake = Snake::from_segments(vec![Position { x: 400, y: 0 }], Direction::Right);
        let food = Food::at(Position { x: 400, y: 0 });

        assert_eq!(classify(&snake, &food, Board::standard()), Verdict::Food);
    }

    #[test]
    fn tail_duplicate_from_growth_does_not_trigger_self_hit() {
        let mut snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: -20, y: 0 },
            ],
            Direction::Right,
        );
        snake.grow();

        assert_eq!(
            classify(&snake, &far_food(), Board::standard()),
            Verdict::None,
        );
    }
}
