#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub fn delta(self) -> (i32, i32) {
        match self { Dir::Up => (0, -1), Dir::Down => (0, 1), Dir::Left => (-1, 0), Dir::Right => (1, 0) }
    }

    pub fn opposite(self) -> Dir {
        match self { Dir::Up => Dir::Down, Dir::Down => Dir::Up, Dir::Left => Dir::Right, Dir::Right => Dir::Left }
    }

    pub fn offset(self, p: Pos) -> Pos {
        let (dx, dy) = self.delta();
        Pos::new(p.x + dx, p.y + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites_pair_up() {
        for d in [Dir::Up, Dir::Down, Dir::Left, Dir::Right] {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn offset_moves_one_cell() {
        let p = Pos::new(3, 4);
        assert_eq!(Dir::Up.offset(p), Pos::new(3, 3));
        assert_eq!(Dir::Down.offset(p), Pos::new(3, 5));
        assert_eq!(Dir::Left.offset(p), Pos::new(2, 4));
        assert_eq!(Dir::Right.offset(p), Pos::new(4, 4));
    }
}
