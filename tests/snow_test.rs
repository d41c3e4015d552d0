use katzenbaum::animate::snow::{
    FLOOR_BOUND, MAX_FALL_SPEED, MIN_FALL_SPEED, Particle, RESPAWN_HEIGHT, SPAWN_EXTENT,
};
use katzenbaum::scatter::Scatter;

#[test]
fn spawned_particles_sit_inside_the_volume() {
    let mut scatter = Scatter::new(7);
    for _ in 0..500 {
        let p = Particle::spawn(&mut scatter);
        assert!(p.position.x.abs() <= SPAWN_EXTENT);
        assert!(p.position.z.abs() <= SPAWN_EXTENT);
        assert!(p.position.y >= FLOOR_BOUND && p.position.y <= RESPAWN_HEIGHT);
        assert!(p.speed >= MIN_FALL_SPEED && p.speed <= MAX_FALL_SPEED);
    }
}

#[test]
fn particle_falls_by_speed_times_dt() {
    let mut scatter = Scatter::new(11);
    let mut p = Particle::spawn(&mut scatter);
    p.position.y = 5.0;
    let before = p.position.y;
    let dt = 1.0 / 60.0;
    p.step(0.0, dt, &mut scatter);
    assert!((before - p.position.y - p.speed * dt).abs() < 1e-5);
}

#[test]
fn particle_wraps_to_respawn_height() {
    let mut scatter = Scatter::new(13);
    let mut p = Particle::spawn(&mut scatter);
    p.position.y = FLOOR_BOUND + 1e-4;
    // A generous step pushes it through the floor bound.
    p.step(0.0, 0.5, &mut scatter);
    assert_eq!(p.position.y, RESPAWN_HEIGHT);
    assert!(p.position.x.abs() <= SPAWN_EXTENT);
    assert!(p.position.z.abs() <= SPAWN_EXTENT);
}

#[test]
fn every_particle_eventually_wraps() {
    let mut scatter = Scatter::new(17);
    let mut particles: Vec<Particle> = (0..50).map(|_| Particle::spawn(&mut scatter)).collect();
    let mut elapsed = 0.0;
    let dt = 1.0 / 30.0;
    let mut wrapped = vec![false; particles.len()];
    // At the slowest fall speed the full drop takes under 22 seconds.
    for _ in 0..(30 * 25) {
        elapsed += dt;
        for (i, p) in particles.iter_mut().enumerate() {
            let before = p.position.y;
            p.step(elapsed, dt, &mut scatter);
            if p.position.y > before {
                wrapped[i] = true;
            }
            assert!(p.position.y >= FLOOR_BOUND - MAX_FALL_SPEED * dt);
            assert!(p.position.y <= RESPAWN_HEIGHT);
        }
    }
    assert!(
        wrapped.iter().all(|&w| w),
        "some particles never recycled: {:?}",
        wrapped
    );
}
