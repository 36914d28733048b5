//! Role preambles and task templates for the three pipeline steps.
//!
//! Each step is an ordered (role, task template, dependencies) tuple. The
//! task text embeds the user's answers; dependencies name the prior steps
//! whose raw outputs are injected as context at execution time.

use super::profile::UserProfile;

/// One step of the advisory pipeline, fully rendered for a given profile.
#[derive(Debug, Clone)]
pub struct StepSpec {
    /// Stable step identifier, used in logs and error messages.
    pub name: &'static str,
    /// System prompt establishing the specialist role.
    pub preamble: String,
    /// The task given to the model, with profile fields embedded.
    pub description: String,
    /// Hint describing the shape of the desired answer.
    pub expected_output: &'static str,
    /// Indices of prior steps whose outputs are concatenated as context.
    pub context: &'static [usize],
    /// Web search query run before the step, if any.
    pub search_query: Option<String>,
}

fn role_preamble(role: &str, goal: &str, backstory: &str) -> String {
    format!("You are a {role}.\n{backstory}\nYour goal: {goal}")
}

fn nutritionist_preamble() -> String {
    role_preamble(
        "Nutrition Specialist",
        "research and develop personalized nutritional recommendations based on scientific evidence",
        "You are a highly qualified nutritionist with expertise in therapeutic diets, \
         nutrient interactions, and dietary requirements across different health conditions. \
         Your recommendations are always backed by peer-reviewed research.",
    )
}

fn medical_specialist_preamble() -> String {
    role_preamble(
        "Medical Nutrition Therapist",
        "analyze medical conditions and provide appropriate dietary modifications",
        "With dual training in medicine and nutrition, you specialize in managing \
         nutrition-related aspects of various medical conditions. You understand \
         medication-food interactions and how to optimize nutrition within medical constraints.",
    )
}

fn diet_planner_preamble() -> String {
    role_preamble(
        "Therapeutic Diet Planner",
        "create detailed, practical and enjoyable meal plans tailored to individual needs",
        "You excel at transforming clinical nutrition requirements into delicious, \
         practical eating plans. You have extensive knowledge of food preparation, \
         nutrient preservation, and food combinations that optimize both health and enjoyment.",
    )
}

fn demographics_task(profile: &UserProfile) -> String {
    format!(
        "Research nutritional needs for an individual with the following demographics:\n\
         - Age: {}\n\
         - Gender: {}\n\
         - Height: {}\n\
         - Weight: {}\n\
         - Activity Level: {}\n\
         - Goals: {}\n\n\
         Provide detailed nutritional requirements including:\n\
         1. Caloric needs (basal and adjusted for activity)\n\
         2. Macronutrient distribution (proteins, carbs, fats)\n\
         3. Key micronutrients particularly important for this demographic\n\
         4. Hydration requirements\n\
         5. Meal timing and frequency recommendations",
        profile.age,
        profile.gender,
        profile.height,
        profile.weight,
        profile.activity_level,
        profile.goals,
    )
}

fn medical_task(profile: &UserProfile) -> String {
    format!(
        "Analyze the following medical conditions and medications, then provide dietary modifications:\n\
         - Medical Conditions: {}\n\
         - Medications: {}\n\
         - Allergies/Intolerances: {}\n\n\
         Consider the baseline nutritional profile and provide:\n\
         1. Specific nutrients to increase or limit based on each condition\n\
         2. Food-medication interactions to avoid\n\
         3. Potential nutrient deficiencies associated with these conditions/medications\n\
         4. Foods that may help manage symptoms or improve outcomes\n\
         5. Foods to strictly avoid",
        profile.medical_conditions, profile.medications, profile.allergies,
    )
}

fn plan_task(profile: &UserProfile) -> String {
    format!(
        "Create a detailed, practical diet plan incorporating all information:\n\
         - User's Food Preferences: {}\n\
         - Cooking Skills/Time: {}\n\
         - Budget Constraints: {}\n\
         - Cultural/Religious Factors: {}\n\n\
         Develop a comprehensive nutrition plan that includes:\n\
         1. Specific foods to eat daily, weekly, and occasionally with portion sizes\n\
         2. A 7-day meal plan with specific meals and recipes\n\
         3. Grocery shopping list with specific items\n\
         4. Meal preparation tips and simple recipes\n\
         5. Eating out guidelines and suggested restaurant options/orders\n\
         6. Supplement recommendations if necessary (with scientific justification)\n\
         7. Hydration schedule and recommended beverages\n\
         8. How to monitor progress and potential adjustments over time",
        profile.food_preferences, profile.cooking_ability, profile.budget, profile.cultural_factors,
    )
}

/// Build the fixed three-step sequence for a profile.
///
/// Order is load-bearing: each later step's context indices refer to earlier
/// steps, so execution must follow the returned order.
pub fn build_steps(profile: &UserProfile) -> Vec<StepSpec> {
    vec![
        StepSpec {
            name: "demographics_research",
            preamble: nutritionist_preamble(),
            description: demographics_task(profile),
            expected_output: "A comprehensive nutritional profile with scientific rationale",
            context: &[],
            search_query: Some(format!(
                "nutritional requirements {} year old {} {} {}",
                profile.age, profile.gender, profile.activity_level, profile.goals,
            )),
        },
        StepSpec {
            name: "medical_analysis",
            preamble: medical_specialist_preamble(),
            description: medical_task(profile),
            expected_output: "A detailed analysis of medical nutrition therapy adjustments",
            context: &[0],
            search_query: Some(format!(
                "dietary modifications for {} taking {}",
                profile.medical_conditions, profile.medications,
            )),
        },
        StepSpec {
            name: "diet_plan",
            preamble: diet_planner_preamble(),
            description: plan_task(profile),
            expected_output: "A comprehensive, practical, and personalized nutrition plan",
            context: &[0, 1],
            search_query: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            age: 41,
            gender: "Female".to_string(),
            height: "165 cm".to_string(),
            weight: "70 kg".to_string(),
            activity_level: "Lightly Active".to_string(),
            goals: "Weight Loss, Better Energy".to_string(),
            medical_conditions: "Hypothyroidism".to_string(),
            medications: "Levothyroxine".to_string(),
            allergies: "Lactose".to_string(),
            food_preferences: "Dislike seafood".to_string(),
            cooking_ability: "Basic/Quick Meals".to_string(),
            budget: "Budget Conscious".to_string(),
            cultural_factors: "No specific factors".to_string(),
        }
    }

    #[test]
    fn builds_three_steps_in_fixed_order() {
        let steps = build_steps(&sample_profile());
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].name, "demographics_research");
        assert_eq!(steps[1].name, "medical_analysis");
        assert_eq!(steps[2].name, "diet_plan");
    }

    #[test]
    fn context_indices_point_at_prior_steps() {
        let steps = build_steps(&sample_profile());
        assert!(steps[0].context.is_empty());
        assert_eq!(steps[1].context, &[0]);
        assert_eq!(steps[2].context, &[0, 1]);
    }

    #[test]
    fn demographics_task_embeds_demographic_fields() {
        let steps = build_steps(&sample_profile());
        let task = &steps[0].description;
        assert!(task.contains("Age: 41"));
        assert!(task.contains("Gender: Female"));
        assert!(task.contains("Height: 165 cm"));
        assert!(task.contains("Weight: 70 kg"));
        assert!(task.contains("Activity Level: Lightly Active"));
        assert!(task.contains("Goals: Weight Loss, Better Energy"));
    }

    #[test]
    fn medical_task_embeds_health_fields() {
        let steps = build_steps(&sample_profile());
        let task = &steps[1].description;
        assert!(task.contains("Hypothyroidism"));
        assert!(task.contains("Levothyroxine"));
        assert!(task.contains("Lactose"));
    }

    #[test]
    fn plan_task_embeds_lifestyle_fields() {
        let steps = build_steps(&sample_profile());
        let task = &steps[2].description;
        assert!(task.contains("Dislike seafood"));
        assert!(task.contains("Basic/Quick Meals"));
        assert!(task.contains("Budget Conscious"));
        assert!(task.contains("No specific factors"));
    }

    #[test]
    fn preambles_establish_distinct_roles() {
        let steps = build_steps(&sample_profile());
        assert!(steps[0].preamble.contains("Nutrition Specialist"));
        assert!(steps[1].preamble.contains("Medical Nutrition Therapist"));
        assert!(steps[2].preamble.contains("Therapeutic Diet Planner"));
    }

    #[test]
    fn research_steps_have_search_queries_final_step_does_not() {
        let steps = build_steps(&sample_profile());
        assert!(steps[0].search_query.as_deref().unwrap().contains("41 year old"));
        assert!(steps[1].search_query.as_deref().unwrap().contains("Hypothyroidism"));
        assert!(steps[2].search_query.is_none());
    }
}
