use std::collections::HashMap;

use crate::models::{
    defaults, ExerciseEffort, ExerciseTemplate, ExerciseType, FitnessLevel, Goal, ScalingOptions,
};

/// Pre-authored exercise routines keyed by training goal and fitness level.
///
/// Each (goal, level) pair carries several day variants; the Nth workout day
/// of a week uses variant N modulo the authored count, so rotation wraps
/// instead of running out. Built once and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    routines: HashMap<(Goal, FitnessLevel), Vec<Vec<ExerciseTemplate>>>,
}

impl ExerciseCatalog {
    pub fn new() -> Self {
        let mut routines = HashMap::new();
        for goal in Goal::ALL {
            for level in FitnessLevel::ALL {
                routines.insert((goal, level), build_variants(goal, level));
            }
        }
        Self { routines }
    }

    /// Exercises for the `variant_index`-th workout day of the week.
    ///
    /// Lookup is total: the constructor authors every (goal, level) pair, an
    /// unknown goal falls back to the canonical default goal, an unknown
    /// level to beginner, and the variant index wraps modulo the authored
    /// count. Callers receive owned clones; catalog templates are never
    /// handed out mutably.
    pub fn day_routine(
        &self,
        goal: Goal,
        level: FitnessLevel,
        variant_index: usize,
    ) -> Vec<ExerciseTemplate> {
        let variants = self
            .routines
            .get(&(goal, level))
            .or_else(|| self.routines.get(&(defaults::GOAL, level)))
            .or_else(|| self.routines.get(&(defaults::GOAL, FitnessLevel::Beginner)));

        let Some(variants) = variants.filter(|v| !v.is_empty()) else {
            // Unreachable: new() populates the full (goal, level) product.
            let mut fallback = build_variants(defaults::GOAL, FitnessLevel::Beginner);
            let index = variant_index % fallback.len();
            return fallback.swap_remove(index);
        };

        variants[variant_index % variants.len()].clone()
    }

    /// Number of authored day variants for a (goal, level) pair.
    pub fn variant_count(&self, goal: Goal, level: FitnessLevel) -> usize {
        self.routines.get(&(goal, level)).map_or(0, Vec::len)
    }
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn build_variants(goal: Goal, level: FitnessLevel) -> Vec<Vec<ExerciseTemplate>> {
    match goal {
        Goal::FatLoss => fat_loss_variants(level),
        Goal::MuscleBuilding => muscle_building_variants(level),
        Goal::Maintenance => maintenance_variants(level),
        Goal::Strength => strength_variants(level),
        Goal::Endurance => endurance_variants(level),
    }
}

// Day variants per goal. Each variant is one workout day's ordered routine;
// counters rotate through them for weekly variety without randomness.

fn fat_loss_variants(level: FitnessLevel) -> Vec<Vec<ExerciseTemplate>> {
    match level {
        FitnessLevel::Beginner => vec![
            vec![
                bodyweight_squat(3, 12),
                incline_push_up(3, 8),
                brisk_walk(20),
                plank(30),
            ],
            vec![
                jumping_jacks(60),
                glute_bridge(3, 12),
                mountain_climbers(30),
                hamstring_stretch(45),
            ],
            vec![
                brisk_walk(25),
                dumbbell_row(3, 10),
                high_knees(30),
                childs_pose(60),
            ],
        ],
        FitnessLevel::Intermediate => vec![
            vec![
                goblet_squat(4, 12),
                push_up(3, 12),
                jump_rope(90),
                plank(45),
            ],
            vec![
                interval_sprints(30, 60),
                kettlebell_swing(4, 15),
                mountain_climbers(45),
                hip_flexor_stretch(45),
            ],
            vec![
                dumbbell_lunge(3, 12),
                rowing_machine(15),
                burpees(45),
                hamstring_stretch(45),
            ],
        ],
        FitnessLevel::Advanced => vec![
            vec![
                back_squat(4, 10, 90),
                pull_up(4, 8),
                burpees(60),
                plank(60),
            ],
            vec![
                interval_sprints(45, 45),
                kettlebell_swing(5, 20),
                jump_rope(120),
                mobility_flow(120),
            ],
            vec![
                deadlift(4, 8, 120),
                tempo_run(20),
                mountain_climbers(60),
                foam_rolling(90),
            ],
        ],
    }
}

fn muscle_building_variants(level: FitnessLevel) -> Vec<Vec<ExerciseTemplate>> {
    match level {
        FitnessLevel::Beginner => vec![
            vec![
                incline_push_up(3, 10),
                overhead_press(3, 10),
                plank(30),
                shoulder_stretch(30),
            ],
            vec![
                lat_pulldown(3, 10),
                dumbbell_row(3, 10),
                glute_bridge(3, 12),
                cat_cow(45),
            ],
            vec![
                bodyweight_squat(3, 12),
                dumbbell_lunge(3, 10),
                hamstring_stretch(45),
            ],
        ],
        FitnessLevel::Intermediate => vec![
            vec![
                bench_press(4, 8, 90),
                overhead_press(3, 10),
                push_up(3, 15),
                shoulder_stretch(45),
            ],
            vec![
                barbell_row(4, 8),
                lat_pulldown(3, 10),
                russian_twist(3, 20),
                cat_cow(45),
            ],
            vec![
                back_squat(4, 8, 120),
                romanian_deadlift(3, 10),
                glute_bridge(3, 15),
                foam_rolling(60),
            ],
        ],
        FitnessLevel::Advanced => vec![
            vec![
                bench_press(5, 5, 120),
                overhead_press(4, 8),
                pull_up(4, 10),
                plank(60),
            ],
            vec![
                deadlift(5, 5, 180),
                barbell_row(4, 8),
                kettlebell_swing(4, 15),
                foam_rolling(90),
            ],
            vec![
                back_squat(5, 5, 180),
                romanian_deadlift(4, 8),
                dumbbell_lunge(4, 12),
                hip_flexor_stretch(60),
            ],
        ],
    }
}

fn maintenance_variants(level: FitnessLevel) -> Vec<Vec<ExerciseTemplate>> {
    match level {
        FitnessLevel::Beginner => vec![
            vec![
                bodyweight_squat(2, 12),
                incline_push_up(2, 10),
                brisk_walk(20),
                hamstring_stretch(30),
            ],
            vec![brisk_walk(30), glute_bridge(3, 10), cat_cow(60)],
            vec![dumbbell_row(3, 10), plank(30), childs_pose(60)],
        ],
        FitnessLevel::Intermediate => vec![
            vec![
                goblet_squat(3, 10),
                push_up(3, 12),
                steady_jog(20),
                hamstring_stretch(45),
            ],
            vec![stationary_bike(25), kettlebell_swing(3, 12), plank(45)],
            vec![dumbbell_lunge(3, 10), lat_pulldown(3, 10), mobility_flow(90)],
        ],
        FitnessLevel::Advanced => vec![
            vec![
                back_squat(3, 8, 90),
                pull_up(3, 8),
                steady_jog(25),
                foam_rolling(60),
            ],
            vec![rowing_machine(20), overhead_press(3, 8), plank(60)],
            vec![romanian_deadlift(3, 8), bench_press(3, 8, 90), mobility_flow(120)],
        ],
    }
}

fn strength_variants(level: FitnessLevel) -> Vec<Vec<ExerciseTemplate>> {
    match level {
        FitnessLevel::Beginner => vec![
            vec![goblet_squat(3, 8), incline_push_up(3, 8), plank(30)],
            vec![romanian_deadlift(3, 8), dumbbell_row(3, 8), glute_bridge(3, 10)],
            vec![leg_press(3, 8), overhead_press(3, 8), hamstring_stretch(45)],
        ],
        FitnessLevel::Intermediate => vec![
            vec![back_squat(4, 6, 150), bench_press(4, 6, 150), plank(45)],
            vec![deadlift(4, 5, 180), barbell_row(4, 6), hip_flexor_stretch(45)],
            vec![overhead_press(4, 6), pull_up(4, 6), glute_bridge(3, 12)],
        ],
        FitnessLevel::Advanced => vec![
            vec![back_squat(5, 3, 240), bench_press(5, 3, 240), foam_rolling(60)],
            vec![deadlift(5, 3, 300), pull_up(5, 5), plank(60)],
            vec![overhead_press(5, 3), barbell_row(5, 5), mobility_flow(90)],
        ],
    }
}

fn endurance_variants(level: FitnessLevel) -> Vec<Vec<ExerciseTemplate>> {
    match level {
        FitnessLevel::Beginner => vec![
            vec![brisk_walk(30), bodyweight_squat(2, 15), hamstring_stretch(45)],
            vec![stationary_bike(20), glute_bridge(2, 15), cat_cow(45)],
            vec![steady_jog(15), plank(30), childs_pose(60)],
        ],
        FitnessLevel::Intermediate => vec![
            vec![steady_jog(30), dumbbell_lunge(3, 12), hip_flexor_stretch(45)],
            vec![rowing_machine(20), kettlebell_swing(3, 15), plank(45)],
            vec![tempo_run(20), bodyweight_squat(3, 20), hamstring_stretch(60)],
        ],
        FitnessLevel::Advanced => vec![
            vec![tempo_run(35), interval_sprints(60, 60), foam_rolling(90)],
            vec![rowing_machine(30), hill_repeats(45, 90), plank(75)],
            vec![steady_jog(45), kettlebell_swing(4, 20), mobility_flow(120)],
        ],
    }
}

// Template constructors. Parameters cover the dimensions the variants scale
// by level (sets, reps, duration, rest); cues and scaling notes stay fixed
// per exercise.

fn strength_template(
    name: &str,
    sets: u32,
    reps: u32,
    rest_time_seconds: u32,
    instructions: &[&str],
    beginner: &str,
    advanced: &str,
) -> ExerciseTemplate {
    ExerciseTemplate {
        name: name.to_string(),
        exercise_type: ExerciseType::Strength,
        effort: ExerciseEffort::SetsReps { sets, reps },
        rest_time_seconds,
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        modifications: ScalingOptions {
            beginner: beginner.to_string(),
            advanced: advanced.to_string(),
        },
    }
}

fn timed_template(
    name: &str,
    exercise_type: ExerciseType,
    duration_seconds: u32,
    rest_time_seconds: u32,
    instructions: &[&str],
    beginner: &str,
    advanced: &str,
) -> ExerciseTemplate {
    ExerciseTemplate {
        name: name.to_string(),
        exercise_type,
        effort: ExerciseEffort::Timed { duration_seconds },
        rest_time_seconds,
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        modifications: ScalingOptions {
            beginner: beginner.to_string(),
            advanced: advanced.to_string(),
        },
    }
}

fn bodyweight_squat(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Bodyweight Squat",
        sets,
        reps,
        60,
        &[
            "Stand with feet shoulder-width apart, toes slightly out.",
            "Sit back and down until thighs are parallel to the floor.",
            "Drive through the heels to stand back up.",
        ],
        "Squat to a chair or box to control depth.",
        "Add a pause at the bottom or hold a weight at the chest.",
    )
}

fn goblet_squat(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Goblet Squat",
        sets,
        reps,
        75,
        &[
            "Hold a dumbbell or kettlebell against the chest.",
            "Squat between the knees, keeping the torso upright.",
            "Stand up without letting the elbows drop inside the knees.",
        ],
        "Use a light weight or no weight at all.",
        "Slow the lowering phase to a three-second count.",
    )
}

fn back_squat(sets: u32, reps: u32, rest_time_seconds: u32) -> ExerciseTemplate {
    strength_template(
        "Barbell Back Squat",
        sets,
        reps,
        rest_time_seconds,
        &[
            "Set the bar across the upper back, brace, and unrack.",
            "Squat to at least parallel with knees tracking the toes.",
            "Drive up hard, exhaling through the sticking point.",
        ],
        "Start with the empty bar or a goblet squat instead.",
        "Add tempo work or increase the load week to week.",
    )
}

fn leg_press(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Leg Press",
        sets,
        reps,
        90,
        &[
            "Place feet hip-width on the platform.",
            "Lower under control until knees reach roughly ninety degrees.",
            "Press back up without locking the knees out.",
        ],
        "Reduce the load and shorten the range of motion.",
        "Use a single-leg variation with moderate weight.",
    )
}

fn push_up(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Push-Up",
        sets,
        reps,
        60,
        &[
            "Start in a straight-line plank, hands under shoulders.",
            "Lower the chest to just above the floor, elbows at 45 degrees.",
            "Press back up keeping the hips level.",
        ],
        "Drop to the knees or elevate the hands.",
        "Elevate the feet or add a resistance band across the back.",
    )
}

fn incline_push_up(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Incline Push-Up",
        sets,
        reps,
        60,
        &[
            "Place hands on a bench or sturdy surface at hip height.",
            "Keep the body in one line from head to heels.",
            "Lower the chest to the edge and press away.",
        ],
        "Raise the incline to reduce the load.",
        "Lower the incline until it becomes a floor push-up.",
    )
}

fn bench_press(sets: u32, reps: u32, rest_time_seconds: u32) -> ExerciseTemplate {
    strength_template(
        "Barbell Bench Press",
        sets,
        reps,
        rest_time_seconds,
        &[
            "Set the shoulder blades back and down on the bench.",
            "Lower the bar to the mid-chest under control.",
            "Press to lockout with the feet planted.",
        ],
        "Use dumbbells or the empty bar to groove the pattern.",
        "Add a controlled pause on the chest each rep.",
    )
}

fn overhead_press(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Overhead Press",
        sets,
        reps,
        90,
        &[
            "Grip just outside the shoulders, elbows under the bar.",
            "Brace the trunk and press straight overhead.",
            "Finish with the bar over the mid-foot, biceps by the ears.",
        ],
        "Press seated with dumbbells for more stability.",
        "Add push-press singles after the straight sets.",
    )
}

fn dumbbell_row(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Single-Arm Dumbbell Row",
        sets,
        reps,
        60,
        &[
            "Support one hand and knee on a bench, back flat.",
            "Row the dumbbell to the hip, leading with the elbow.",
            "Lower slowly without rotating the torso.",
        ],
        "Lighten the weight and shorten the range.",
        "Add a one-second squeeze at the top of each rep.",
    )
}

fn barbell_row(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Barbell Bent-Over Row",
        sets,
        reps,
        90,
        &[
            "Hinge to roughly forty-five degrees with a flat back.",
            "Pull the bar to the lower ribs.",
            "Control the descent without letting the torso rise.",
        ],
        "Use a chest-supported row machine instead.",
        "Pause each rep on the ribs before lowering.",
    )
}

fn lat_pulldown(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Lat Pulldown",
        sets,
        reps,
        60,
        &[
            "Grip slightly wider than the shoulders.",
            "Pull the bar to the collarbone while the chest stays tall.",
            "Resist the weight all the way back up.",
        ],
        "Use a band-assisted pulldown or lighter stack.",
        "Switch to strict pull-ups once the full stack feels easy.",
    )
}

fn pull_up(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Pull-Up",
        sets,
        reps,
        90,
        &[
            "Hang from the bar with an overhand grip.",
            "Pull until the chin clears the bar without kipping.",
            "Lower to a full hang each rep.",
        ],
        "Use a band for assistance or do slow negatives.",
        "Add weight with a belt once bodyweight sets are solid.",
    )
}

fn dumbbell_lunge(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Dumbbell Walking Lunge",
        sets,
        reps,
        75,
        &[
            "Hold dumbbells at the sides, step forward into a lunge.",
            "Lower the back knee to just above the floor.",
            "Push through the front heel into the next step.",
        ],
        "Do stationary split squats holding a support.",
        "Hold the dumbbells in a front-rack position.",
    )
}

fn romanian_deadlift(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Romanian Deadlift",
        sets,
        reps,
        90,
        &[
            "Start standing with the bar at the hips.",
            "Push the hips back, sliding the bar down the thighs.",
            "Stop when the hamstrings load up, then drive the hips through.",
        ],
        "Use dumbbells and a shorter range of motion.",
        "Slow the eccentric to a four-second count.",
    )
}

fn deadlift(sets: u32, reps: u32, rest_time_seconds: u32) -> ExerciseTemplate {
    strength_template(
        "Conventional Deadlift",
        sets,
        reps,
        rest_time_seconds,
        &[
            "Set the bar over the mid-foot, grip just outside the legs.",
            "Brace, take the slack out, and push the floor away.",
            "Lock out with the hips and knees together, then lower under control.",
        ],
        "Pull from blocks or use a trap bar.",
        "Work up to a heavy top set before the back-off sets.",
    )
}

fn glute_bridge(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Glute Bridge",
        sets,
        reps,
        45,
        &[
            "Lie on the back, feet flat and close to the hips.",
            "Drive the hips up until the body forms a straight line.",
            "Squeeze at the top, then lower with control.",
        ],
        "Shorten the range and hold the top for a breath.",
        "Elevate the shoulders and add a barbell for hip thrusts.",
    )
}

fn kettlebell_swing(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Kettlebell Swing",
        sets,
        reps,
        60,
        &[
            "Hinge at the hips and hike the bell back between the legs.",
            "Snap the hips forward to float the bell to chest height.",
            "Let the bell swing back and repeat without squatting.",
        ],
        "Practice hip hinges with a light bell first.",
        "Move to single-arm swings or a heavier bell.",
    )
}

fn russian_twist(sets: u32, reps: u32) -> ExerciseTemplate {
    strength_template(
        "Russian Twist",
        sets,
        reps,
        45,
        &[
            "Sit with knees bent, lean back to a forty-five degree angle.",
            "Rotate the torso side to side, touching the floor each side.",
            "Keep the chest tall throughout.",
        ],
        "Keep the heels on the floor.",
        "Lift the feet and hold a weight plate.",
    )
}

fn plank(duration_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "Plank",
        ExerciseType::Strength,
        duration_seconds,
        45,
        &[
            "Forearms under the shoulders, body in one straight line.",
            "Brace the trunk and squeeze the glutes.",
            "Breathe steadily; stop when the hips start to sag.",
        ],
        "Hold from the knees or shorten the hold.",
        "Lift one limb at a time or add a weight plate on the back.",
    )
}

fn brisk_walk(minutes: u32) -> ExerciseTemplate {
    timed_template(
        "Brisk Walk",
        ExerciseType::Cardio,
        minutes * 60,
        0,
        &[
            "Walk fast enough that conversation takes effort.",
            "Keep the arms swinging and posture tall.",
        ],
        "Slow the pace and take flat routes.",
        "Add hills or carry light hand weights.",
    )
}

fn steady_jog(minutes: u32) -> ExerciseTemplate {
    timed_template(
        "Steady Jog",
        ExerciseType::Cardio,
        minutes * 60,
        0,
        &[
            "Run at a conversational pace.",
            "Land softly with a quick, light cadence.",
        ],
        "Alternate one minute jogging with one minute walking.",
        "Extend the duration or finish with strides.",
    )
}

fn tempo_run(minutes: u32) -> ExerciseTemplate {
    timed_template(
        "Tempo Run",
        ExerciseType::Cardio,
        minutes * 60,
        0,
        &[
            "Warm up easy for the first five minutes.",
            "Settle into a comfortably hard pace you could hold for an hour.",
            "Finish with a few minutes of easy jogging.",
        ],
        "Cut the tempo portion in half.",
        "Split the tempo into two blocks with a short float between.",
    )
}

fn interval_sprints(work_seconds: u32, rest_time_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "Interval Sprints",
        ExerciseType::Cardio,
        work_seconds,
        rest_time_seconds,
        &[
            "Warm up thoroughly before the first effort.",
            "Sprint hard for the work period, then recover fully.",
            "Repeat for six to eight rounds, stopping if form degrades.",
        ],
        "Substitute fast walking or bike sprints.",
        "Shorten the recovery or sprint on a slight incline.",
    )
}

fn hill_repeats(work_seconds: u32, rest_time_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "Hill Repeats",
        ExerciseType::Cardio,
        work_seconds,
        rest_time_seconds,
        &[
            "Find a moderate hill that takes the full work period to climb.",
            "Run up hard with a strong arm drive.",
            "Walk back down as recovery and repeat.",
        ],
        "Power-walk the climbs instead of running.",
        "Pick a steeper hill or add extra repeats.",
    )
}

fn stationary_bike(minutes: u32) -> ExerciseTemplate {
    timed_template(
        "Stationary Bike",
        ExerciseType::Cardio,
        minutes * 60,
        0,
        &[
            "Set the saddle so the knee stays slightly bent at the bottom.",
            "Ride at a steady, sustainable effort.",
        ],
        "Lower the resistance and spin easy.",
        "Add thirty-second surges every five minutes.",
    )
}

fn rowing_machine(minutes: u32) -> ExerciseTemplate {
    timed_template(
        "Rowing Machine",
        ExerciseType::Cardio,
        minutes * 60,
        0,
        &[
            "Drive with the legs first, then swing the hips, then pull.",
            "Return hands-hips-knees in reverse order.",
            "Hold a steady split you can sustain.",
        ],
        "Row in short blocks with breaks between.",
        "Hold race pace for the final two minutes.",
    )
}

fn jump_rope(duration_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "Jump Rope",
        ExerciseType::Cardio,
        duration_seconds,
        30,
        &[
            "Jump just high enough to clear the rope.",
            "Keep elbows close and turn from the wrists.",
        ],
        "Practice the rhythm without a rope.",
        "Mix in double-unders or high-knee skips.",
    )
}

fn jumping_jacks(duration_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "Jumping Jacks",
        ExerciseType::Cardio,
        duration_seconds,
        30,
        &[
            "Jump the feet wide while raising the arms overhead.",
            "Return to the start in one smooth motion.",
        ],
        "Step side to side instead of jumping.",
        "Speed up the tempo or switch to star jumps.",
    )
}

fn mountain_climbers(duration_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "Mountain Climbers",
        ExerciseType::Cardio,
        duration_seconds,
        30,
        &[
            "Start in a high plank with hands under shoulders.",
            "Drive the knees toward the chest in alternation.",
            "Keep the hips low and level.",
        ],
        "Slow the pace and step the feet in.",
        "Increase the tempo or add a cross-body knee drive.",
    )
}

fn high_knees(duration_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "High Knees",
        ExerciseType::Cardio,
        duration_seconds,
        30,
        &[
            "Run in place, driving the knees to hip height.",
            "Stay on the balls of the feet with a fast arm swing.",
        ],
        "March in place with a high knee lift.",
        "Push the pace for the full interval.",
    )
}

fn burpees(duration_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "Burpees",
        ExerciseType::Cardio,
        duration_seconds,
        45,
        &[
            "Squat down, kick the feet back to a plank.",
            "Return the feet under the hips and jump up.",
            "Land soft and move straight into the next rep.",
        ],
        "Step back instead of kicking and skip the jump.",
        "Add a push-up at the bottom of each rep.",
    )
}

fn hamstring_stretch(duration_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "Hamstring Stretch",
        ExerciseType::Flexibility,
        duration_seconds,
        15,
        &[
            "Place one heel on a low surface, leg straight.",
            "Hinge forward from the hips until a stretch builds.",
            "Hold and breathe, then switch sides.",
        ],
        "Bend the supporting knee slightly.",
        "Fold deeper and add a gentle ankle flex.",
    )
}

fn hip_flexor_stretch(duration_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "Hip Flexor Stretch",
        ExerciseType::Flexibility,
        duration_seconds,
        15,
        &[
            "Kneel in a lunge position, back knee on the floor.",
            "Tuck the pelvis and shift forward until the front of the hip opens.",
            "Hold, then switch sides.",
        ],
        "Place a pad under the knee and reduce the shift.",
        "Raise the back foot onto a bench for a deeper stretch.",
    )
}

fn shoulder_stretch(duration_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "Shoulder Stretch",
        ExerciseType::Flexibility,
        duration_seconds,
        15,
        &[
            "Pull one arm across the chest with the opposite hand.",
            "Keep the shoulder down away from the ear.",
            "Hold, then switch sides.",
        ],
        "Ease off the pull and shorten the hold.",
        "Follow with a doorway chest stretch.",
    )
}

fn cat_cow(duration_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "Cat-Cow",
        ExerciseType::Flexibility,
        duration_seconds,
        0,
        &[
            "Start on all fours, hands under shoulders.",
            "Alternate arching and rounding the spine with the breath.",
        ],
        "Reduce the range to a comfortable arc.",
        "Slow each cycle to a full breath in and out.",
    )
}

fn childs_pose(duration_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "Child's Pose",
        ExerciseType::Flexibility,
        duration_seconds,
        0,
        &[
            "Kneel and sit back on the heels.",
            "Reach the arms forward and rest the forehead down.",
            "Breathe into the back for the full hold.",
        ],
        "Place a cushion between hips and heels.",
        "Walk the hands to each side to open the lats.",
    )
}

fn foam_rolling(duration_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "Foam Rolling",
        ExerciseType::Flexibility,
        duration_seconds,
        0,
        &[
            "Roll quads, hamstrings, calves, and upper back.",
            "Spend extra time on tender spots without holding the breath.",
        ],
        "Use a softer roller and lighter pressure.",
        "Add slow, targeted passes on the tightest areas.",
    )
}

fn mobility_flow(duration_seconds: u32) -> ExerciseTemplate {
    timed_template(
        "Full-Body Mobility Flow",
        ExerciseType::Flexibility,
        duration_seconds,
        0,
        &[
            "Cycle through deep squat holds, lunges with rotation, and arm circles.",
            "Move continuously at an easy effort.",
        ],
        "Hold onto a support during the deep squat.",
        "Add a minute of loaded ankle and hip work.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_goal_level_pair_is_authored() {
        let catalog = ExerciseCatalog::new();

        for goal in Goal::ALL {
            for level in FitnessLevel::ALL {
                assert!(
                    catalog.variant_count(goal, level) >= 3,
                    "{goal:?}/{level:?} must carry at least 3 day variants"
                );
            }
        }
    }

    #[test]
    fn test_day_routine_is_never_empty() {
        let catalog = ExerciseCatalog::new();

        for goal in Goal::ALL {
            for level in FitnessLevel::ALL {
                for variant_index in 0..10 {
                    let routine = catalog.day_routine(goal, level, variant_index);
                    assert!(
                        !routine.is_empty(),
                        "{goal:?}/{level:?} variant {variant_index} returned no exercises"
                    );
                }
            }
        }
    }

    #[test]
    fn test_variant_index_wraps_modulo_authored_count() {
        let catalog = ExerciseCatalog::new();
        let count = catalog.variant_count(Goal::MuscleBuilding, FitnessLevel::Intermediate);

        let first = catalog.day_routine(Goal::MuscleBuilding, FitnessLevel::Intermediate, 0);
        let wrapped = catalog.day_routine(Goal::MuscleBuilding, FitnessLevel::Intermediate, count);

        assert_eq!(first, wrapped);
    }

    #[test]
    fn test_routines_are_deterministic() {
        let catalog = ExerciseCatalog::new();

        let a = catalog.day_routine(Goal::FatLoss, FitnessLevel::Advanced, 1);
        let b = catalog.day_routine(Goal::FatLoss, FitnessLevel::Advanced, 1);

        assert_eq!(a, b);
    }

    #[test]
    fn test_every_effort_is_well_formed() {
        let catalog = ExerciseCatalog::new();

        for goal in Goal::ALL {
            for level in FitnessLevel::ALL {
                for variant_index in 0..catalog.variant_count(goal, level) {
                    for exercise in catalog.day_routine(goal, level, variant_index) {
                        match exercise.effort {
                            ExerciseEffort::SetsReps { sets, reps } => {
                                assert!(sets > 0 && reps > 0, "{} has empty sets", exercise.name);
                            }
                            ExerciseEffort::Timed { duration_seconds } => {
                                assert!(duration_seconds > 0, "{} has no duration", exercise.name);
                            }
                        }
                    }
                }
            }
        }
    }
}
