use hashbrown::HashSet;
use vek::Vec3;

use dash_ability::DashRaycast;

/// 實心方塊格子
#[derive(Clone, Debug, Default)]
pub struct BlockWorld {
    solid: HashSet<Vec3<i32>>,
}

impl BlockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_solid(&mut self, block: Vec3<i32>) {
        self.solid.insert(block);
    }

    pub fn is_solid(&self, block: Vec3<i32>) -> bool {
        self.solid.contains(&block)
    }

    /// 填滿 min..=max 的長方體
    pub fn fill(&mut self, min: Vec3<i32>, max: Vec3<i32>) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.solid.insert(Vec3::new(x, y, z));
                }
            }
        }
    }

    /// 所在的方塊座標
    pub fn block_at(pos: Vec3<f64>) -> Vec3<i32> {
        pos.map(|c| c.floor() as i32)
    }
}

impl DashRaycast for BlockWorld {
    /// 逐格走訪射線經過的方塊，碰到第一個實心方塊時回傳前一格的底面中心
    fn raytrace_for_dash(&self, eye: Vec3<f64>, look: Vec3<f64>, max_range: f64) -> Option<Vec3<f64>> {
        let len = look.magnitude();
        let eye_ok = eye.x.is_finite() && eye.y.is_finite() && eye.z.is_finite();
        if !(len.is_finite() && len > 0.0) || !eye_ok || !max_range.is_finite() {
            return None;
        }
        let dir = look / len;

        let start = Self::block_at(eye);
        if self.is_solid(start) {
            return None;
        }
        let mut cell = [start.x, start.y, start.z];

        let origin = [eye.x, eye.y, eye.z];
        let d = [dir.x, dir.y, dir.z];
        let mut step = [0i32; 3];
        let mut t_max = [f64::INFINITY; 3];
        let mut t_delta = [f64::INFINITY; 3];
        for axis in 0..3 {
            let c = cell[axis] as f64;
            if d[axis] > 0.0 {
                step[axis] = 1;
                t_max[axis] = (c + 1.0 - origin[axis]) / d[axis];
                t_delta[axis] = 1.0 / d[axis];
            } else if d[axis] < 0.0 {
                step[axis] = -1;
                t_max[axis] = (origin[axis] - c) / -d[axis];
                t_delta[axis] = -1.0 / d[axis];
            }
        }

        loop {
            let axis = if t_max[0] <= t_max[1] && t_max[0] <= t_max[2] {
                0
            } else if t_max[1] <= t_max[2] {
                1
            } else {
                2
            };
            if t_max[axis] > max_range {
                return None;
            }

            let mut next = cell;
            next[axis] = next[axis].checked_add(step[axis])?;
            if self.is_solid(Vec3::from(next)) {
                return Some(Vec3::new(
                    cell[0] as f64 + 0.5,
                    cell[1] as f64,
                    cell[2] as f64 + 0.5,
                ));
            }
            cell = next;
            t_max[axis] += t_delta[axis];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_world() -> BlockWorld {
        let mut world = BlockWorld::new();
        world.fill(Vec3::new(-20, 63, -20), Vec3::new(20, 63, 20));
        world
    }

    #[test]
    fn test_look_down_hits_floor() {
        let world = floor_world();
        let eye = Vec3::new(0.5, 65.62, 0.5);
        let target = world.raytrace_for_dash(eye, Vec3::new(0.0, -1.0, 0.0), 16.0);
        assert_eq!(target, Some(Vec3::new(0.5, 64.0, 0.5)));
    }

    #[test]
    fn test_diagonal_lands_on_floor_ahead() {
        let world = floor_world();
        let eye = Vec3::new(0.5, 65.62, 0.5);
        let target = world
            .raytrace_for_dash(eye, Vec3::new(0.0, -1.0, 1.0), 16.0)
            .unwrap();
        assert_eq!(target.y, 64.0);
        assert!(target.z > 1.0 && target.z < 3.0);
    }

    #[test]
    fn test_open_sky_misses() {
        let world = floor_world();
        let eye = Vec3::new(0.5, 65.62, 0.5);
        assert_eq!(world.raytrace_for_dash(eye, Vec3::new(0.0, 1.0, 0.0), 16.0), None);
    }

    #[test]
    fn test_obstruction_beyond_range_misses() {
        let mut world = BlockWorld::new();
        world.set_solid(Vec3::new(0, 64, 20));
        let eye = Vec3::new(0.5, 64.5, 0.5);
        let look = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(world.raytrace_for_dash(eye, look, 16.0), None);
        assert_eq!(
            world.raytrace_for_dash(eye, look, 32.0),
            Some(Vec3::new(0.5, 64.0, 19.5))
        );
    }

    #[test]
    fn test_stops_at_first_wall() {
        let mut world = BlockWorld::new();
        world.set_solid(Vec3::new(0, 64, 3));
        world.set_solid(Vec3::new(0, 64, 6));
        let target = world.raytrace_for_dash(Vec3::new(0.5, 64.5, 0.5), Vec3::new(0.0, 0.0, 1.0), 16.0);
        assert_eq!(target, Some(Vec3::new(0.5, 64.0, 2.5)));
    }

    #[test]
    fn test_edge_of_coordinate_space_misses() {
        let world = BlockWorld::new();
        let eye = Vec3::new(f64::from(i32::MAX) + 0.5, 64.5, 0.5);
        assert_eq!(world.raytrace_for_dash(eye, Vec3::new(1.0, 0.0, 0.0), 16.0), None);
        let eye = Vec3::new(1.0e12, 64.5, 0.5);
        assert_eq!(world.raytrace_for_dash(eye, Vec3::new(1.0, 0.0, 0.0), 16.0), None);
    }

    #[test]
    fn test_degenerate_inputs() {
        let world = floor_world();
        assert_eq!(world.raytrace_for_dash(Vec3::new(0.5, 65.0, 0.5), Vec3::zero(), 16.0), None);
        // 眼睛在方塊裡
        assert_eq!(
            world.raytrace_for_dash(Vec3::new(0.5, 63.5, 0.5), Vec3::new(0.0, -1.0, 0.0), 16.0),
            None
        );
    }
}
