// Character animation: the animator contract and a frame-stepping player

use std::collections::HashMap;

use super::config::AnimationClipNames;

/// Host animator the controller issues clip requests to
pub trait Animator {
    /// Play a clip by name. Requesting the clip that is already playing must
    /// not restart it.
    fn play(&mut self, clip: &str);

    /// Name of the clip currently playing (empty before the first request)
    fn current_clip(&self) -> &str;
}

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    pub looping: bool,
}

impl AnimationClip {
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count: frame_count.max(1),
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

/// Manages animation playback for a character sprite
#[derive(Debug, Default)]
pub struct AnimationPlayer {
    animations: HashMap<String, AnimationClip>,
    current_animation: String,
    current_frame: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    playing: bool,
    /// Number of times a different clip was started
    clip_changes: u32,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Player with looping jump/idle/walk clips under the configured names
    pub fn with_character_clips(clips: &AnimationClipNames) -> Self {
        let mut player = Self::new();
        player.add_animation(AnimationClip::looping(&clips.jump, 4, 10.0));
        player.add_animation(AnimationClip::looping(&clips.idle, 8, 10.0));
        player.add_animation(AnimationClip::looping(&clips.walk, 8, 12.0));
        player
    }

    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    pub fn has_animation(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    /// Play an animation from the beginning, even if it's the same
    pub fn play_from_start(&mut self, name: &str) {
        if !self.animations.contains_key(name) {
            log::warn!("Animation clip '{}' is not registered", name);
        }
        self.current_animation = name.to_string();
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.playing = true;
        self.clip_changes += 1;
    }

    /// Stop and reset the current animation
    pub fn stop(&mut self) {
        self.playing = false;
        self.current_frame = 0;
        self.frame_timer = 0.0;
    }

    /// Advance playback (called every frame)
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            return;
        };

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Stay on last frame
                    self.current_frame = clip.frame_count - 1;
                    self.playing = false;
                    break;
                }
            }
        }
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn clip_changes(&self) -> u32 {
        self.clip_changes
    }

    pub fn current_clip_info(&self) -> Option<&AnimationClip> {
        self.animations.get(&self.current_animation)
    }
}

impl Animator for AnimationPlayer {
    fn play(&mut self, clip: &str) {
        if self.current_animation != clip {
            self.play_from_start(clip);
        }
    }

    fn current_clip(&self) -> &str {
        &self.current_animation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_clip_creation() {
        let clip = AnimationClip::looping("Idle", 4, 8.0);
        assert_eq!(clip.name, "Idle");
        assert_eq!(clip.frame_count, 4);
        assert_eq!(clip.frame_duration, 0.125); // 1/8
        assert!(clip.looping);
        assert_eq!(clip.total_duration(), 0.5);
    }

    #[test]
    fn test_character_clips_registered() {
        let player = AnimationPlayer::with_character_clips(&AnimationClipNames::default());
        assert!(player.has_animation("Jump"));
        assert!(player.has_animation("Idle"));
        assert!(player.has_animation("Walk"));
        assert_eq!(player.current_clip(), "");
    }

    #[test]
    fn test_play_is_idempotent() {
        let mut player = AnimationPlayer::with_character_clips(&AnimationClipNames::default());
        player.play("Walk");
        player.update(0.2);
        let frame = player.current_frame();
        assert!(frame > 0);

        player.play("Walk");
        assert_eq!(player.current_frame(), frame);
        assert_eq!(player.clip_changes(), 1);

        player.play("Idle");
        assert_eq!(player.current_clip(), "Idle");
        assert_eq!(player.current_frame(), 0);
        assert_eq!(player.clip_changes(), 2);
    }

    #[test]
    fn test_animation_player_update() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::looping("test", 4, 10.0)); // 0.1s per frame
        player.play("test");

        player.update(0.15);
        assert_eq!(player.current_frame(), 1);

        player.update(0.1);
        assert_eq!(player.current_frame(), 2);
    }

    #[test]
    fn test_animation_looping() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::looping("test", 3, 10.0));
        player.play("test");

        player.update(0.35); // 3.5 frames
        assert_eq!(player.current_frame(), 0);
        assert!(player.is_playing());
    }

    #[test]
    fn test_animation_one_shot() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::one_shot("test", 3, 10.0));
        player.play("test");

        player.update(0.5);
        assert_eq!(player.current_frame(), 2);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_unknown_clip_does_not_advance() {
        let mut player = AnimationPlayer::new();
        player.play("missing");
        player.update(1.0);
        assert_eq!(player.current_clip(), "missing");
        assert_eq!(player.current_frame(), 0);
        assert!(player.current_clip_info().is_none());
    }

    #[test]
    fn test_stop() {
        let mut player = AnimationPlayer::with_character_clips(&AnimationClipNames::default());
        player.play("Walk");
        player.update(0.2);
        player.stop();
        assert!(!player.is_playing());
        assert_eq!(player.current_frame(), 0);
    }
}
