use std::{
    collections::HashMap,
    hash::Hash,
    time::{Duration, Instant},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    BorderOpa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Infinite,
}

/// Linear interpolation from `from` to `to`, optionally played back to `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub from: i32,
    pub to: i32,
    pub duration: Duration,
    pub playback: Option<Duration>,
    pub repeat: Repeat,
    started_at: Instant,
}

impl Animation {
    pub fn new(from: i32, to: i32, duration: Duration, started_at: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            playback: None,
            repeat: Repeat::Once,
            started_at,
        }
    }

    pub fn with_playback(mut self, playback: Duration) -> Self {
        self.playback = Some(playback);
        self
    }

    pub fn repeat_infinite(mut self) -> Self {
        self.repeat = Repeat::Infinite;
        self
    }

    fn cycle(&self) -> Duration {
        self.duration + self.playback.unwrap_or(Duration::ZERO)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.repeat == Repeat::Once && now.saturating_duration_since(self.started_at) >= self.cycle()
    }

    pub fn value_at(&self, now: Instant) -> i32 {
        if self.is_finished(now) {
            return match self.playback {
                Some(_) => self.from,
                None => self.to,
            };
        }

        let cycle = self.cycle().as_millis().max(1);
        let elapsed = now.saturating_duration_since(self.started_at).as_millis() % cycle;
        let forward = self.duration.as_millis();

        if elapsed < forward {
            lerp(self.from, self.to, elapsed, forward)
        } else {
            let back = self.playback.unwrap_or(Duration::ZERO).as_millis();
            lerp(self.to, self.from, elapsed - forward, back)
        }
    }
}

fn lerp(from: i32, to: i32, step: u128, steps: u128) -> i32 {
    if steps == 0 {
        return to;
    }
    let span = (to - from) as i128;
    from + (span * step as i128 / steps as i128) as i32
}

/// Running animations, at most one per key.
///
/// Starting an animation under a key that is already running replaces it.
#[derive(Debug)]
pub struct Animator<K> {
    running: HashMap<K, Animation>,
}

impl<K: Hash + Eq + Copy> Animator<K> {
    pub fn new() -> Self {
        Self {
            running: HashMap::new(),
        }
    }

    pub fn start(&mut self, key: K, animation: Animation) -> Option<Animation> {
        self.running.insert(key, animation)
    }

    pub fn cancel(&mut self, key: K) -> bool {
        self.running.remove(&key).is_some()
    }

    #[cfg(test)]
    pub fn is_running(&self, key: K) -> bool {
        self.running.contains_key(&key)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.running.len()
    }

    /// Current value of every animation. Finished ones report their final value once.
    pub fn sample(&mut self, now: Instant) -> Vec<(K, i32)> {
        let values = self
            .running
            .iter()
            .map(|(key, animation)| (*key, animation.value_at(now)))
            .collect();
        self.running.retain(|_, animation| !animation.is_finished(now));
        values
    }
}

impl<K: Hash + Eq + Copy> Default for Animator<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: Duration = Duration::from_millis(600);

    fn pulse(start: Instant) -> Animation {
        Animation::new(255, 0, HALF, start)
            .with_playback(HALF)
            .repeat_infinite()
    }

    #[test]
    fn pulse_fades_out_and_back() {
        let start = Instant::now();
        let anim = pulse(start);
        assert_eq!(anim.value_at(start), 255);
        assert_eq!(anim.value_at(start + Duration::from_millis(300)), 128);
        assert_eq!(anim.value_at(start + HALF), 0);
        assert_eq!(anim.value_at(start + Duration::from_millis(900)), 127);
        assert_eq!(anim.value_at(start + HALF * 2), 255);
        assert!(!anim.is_finished(start + Duration::from_secs(3600)));
    }

    #[test]
    fn once_finishes_on_target() {
        let start = Instant::now();
        let anim = Animation::new(0, 100, Duration::from_millis(100), start);
        assert_eq!(anim.value_at(start + Duration::from_millis(50)), 50);
        assert!(anim.is_finished(start + Duration::from_millis(100)));
        assert_eq!(anim.value_at(start + Duration::from_millis(500)), 100);
    }

    #[test]
    fn same_key_replaces() {
        let start = Instant::now();
        let mut animator = Animator::new();
        assert!(animator.start(("gate", AnimatedProperty::BorderOpa), pulse(start)).is_none());
        assert!(animator.start(("gate", AnimatedProperty::BorderOpa), pulse(start)).is_some());
        assert_eq!(animator.len(), 1);

        assert!(animator.cancel(("gate", AnimatedProperty::BorderOpa)));
        assert!(!animator.cancel(("gate", AnimatedProperty::BorderOpa)));
        assert_eq!(animator.len(), 0);
    }

    #[test]
    fn sample_drops_finished() {
        let start = Instant::now();
        let mut animator = Animator::new();
        animator.start(1, Animation::new(0, 10, Duration::from_millis(10), start));
        animator.start(2, pulse(start));

        let mut values = animator.sample(start + Duration::from_millis(20));
        values.sort();
        assert_eq!(values, vec![(1, 10), (2, 255 - 255 * 20 / 600)]);
        assert!(!animator.is_running(1));
        assert!(animator.is_running(2));
    }
}
