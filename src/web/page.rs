//! The static intake form page.

/// Single-page intake form. Posts to `/api/plan` and offers the returned
/// plan for download as `my_nutrition_plan.md`.
pub const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>NourishAI: Tailored Nutrition for a Healthier You</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 900px; margin: 0 auto; padding: 1.5rem; color: #222; }
  h1 { font-size: 1.6rem; }
  h2 { font-size: 1.2rem; margin-top: 2rem; border-bottom: 1px solid #ddd; padding-bottom: .3rem; }
  .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
  label { display: block; font-weight: 600; margin-top: .8rem; margin-bottom: .2rem; }
  input[type=text], input[type=number], select, textarea { width: 100%; padding: .4rem; box-sizing: border-box; }
  textarea { min-height: 3.5rem; }
  fieldset { border: 1px solid #ccc; margin-top: .8rem; }
  fieldset label { font-weight: 400; margin: .1rem 0; }
  button { margin-top: 1.5rem; padding: .6rem 1.4rem; font-size: 1rem; cursor: pointer; }
  .banner { padding: .7rem; border-radius: 4px; margin: .8rem 0; display: none; }
  .warn { background: #fff3cd; border: 1px solid #ffe69c; }
  .error { background: #f8d7da; border: 1px solid #f1aeb5; }
  .success { background: #d1e7dd; border: 1px solid #a3cfbb; }
  #spinner { display: none; margin-top: 1rem; font-style: italic; }
  #plan { white-space: pre-wrap; background: #f8f9fa; border: 1px solid #ddd; padding: 1rem; margin-top: 1rem; display: none; }
  #summary { display: none; }
  #download { display: none; }
</style>
</head>
<body>
<h1>🥗 NourishAI: Tailored Nutrition for a Healthier You</h1>
<p>Get a detailed nutrition plan based on your demographics, health conditions, and preferences.
Our AI team of nutrition specialists will create a personalized recommendation just for you.</p>

<div id="keys-warning" class="banner warn">⚠️ API keys not detected. Please set the missing environment variables.</div>
<div id="form-error" class="banner error"></div>

<h2>Personal Information</h2>
<div class="grid">
  <div>
    <label for="age">Age</label>
    <input type="number" id="age" min="1" max="120" value="30">
    <label for="gender">Gender</label>
    <select id="gender">
      <option>Male</option><option>Female</option><option>Non-binary/Other</option>
    </select>
    <label for="height">Height (e.g., 5'10&quot; or 178 cm)</label>
    <input type="text" id="height" value="5'10&quot;">
  </div>
  <div>
    <label for="weight">Weight (e.g., 160 lbs or 73 kg)</label>
    <input type="text" id="weight" value="160 lbs">
    <label for="activity_level">Activity Level</label>
    <select id="activity_level">
      <option>Sedentary</option><option>Lightly Active</option>
      <option selected>Moderately Active</option><option>Very Active</option>
      <option>Extremely Active</option>
    </select>
    <fieldset id="goals">
      <legend>Nutrition Goals</legend>
      <label><input type="checkbox" value="Weight Loss"> Weight Loss</label>
      <label><input type="checkbox" value="Weight Gain"> Weight Gain</label>
      <label><input type="checkbox" value="Maintenance"> Maintenance</label>
      <label><input type="checkbox" value="Muscle Building"> Muscle Building</label>
      <label><input type="checkbox" value="Better Energy"> Better Energy</label>
      <label><input type="checkbox" value="Improved Athletic Performance"> Improved Athletic Performance</label>
      <label><input type="checkbox" value="Disease Management"> Disease Management</label>
      <label><input type="checkbox" value="General Health"> General Health</label>
    </fieldset>
  </div>
</div>

<h2>Health Information</h2>
<label for="medical_conditions">Medical Conditions (separate with commas)</label>
<textarea id="medical_conditions" placeholder="E.g., Diabetes Type 2, Hypertension, Hypothyroidism..."></textarea>
<label for="medications">Current Medications (separate with commas)</label>
<textarea id="medications" placeholder="E.g., Metformin, Lisinopril, Levothyroxine..."></textarea>
<label for="allergies">Food Allergies/Intolerances (separate with commas)</label>
<textarea id="allergies" placeholder="E.g., Lactose, Gluten, Shellfish, Peanuts..."></textarea>

<h2>Preferences &amp; Lifestyle</h2>
<div class="grid">
  <div>
    <label for="food_preferences">Food Preferences &amp; Dislikes</label>
    <textarea id="food_preferences" placeholder="E.g., Prefer plant-based, dislike seafood..."></textarea>
    <label for="cooking_ability">Cooking Skills &amp; Available Time</label>
    <select id="cooking_ability">
      <option>Very Limited</option><option>Basic/Quick Meals</option>
      <option selected>Average</option><option>Advanced/Can Spend Time</option>
      <option>Professional Level</option>
    </select>
  </div>
  <div>
    <label for="budget">Budget Considerations</label>
    <select id="budget">
      <option>Very Limited</option><option>Budget Conscious</option>
      <option selected>Moderate</option><option>Flexible</option>
      <option>No Constraints</option>
    </select>
    <label for="cultural_factors">Cultural or Religious Dietary Factors</label>
    <textarea id="cultural_factors" placeholder="E.g., Halal, Kosher, Mediterranean tradition..."></textarea>
  </div>
</div>

<button id="submit">Generate Nutrition Plan</button>
<div id="spinner">Our nutrition team is creating your personalized plan. This may take a few minutes...</div>

<details id="summary"><summary>Summary of Your Information</summary><pre id="summary-json"></pre></details>
<div id="plan-ready" class="banner success">✅ Your personalized nutrition plan is ready!</div>
<div id="plan"></div>
<button id="download">Download Nutrition Plan</button>

<script>
(async function checkKeys() {
  try {
    const res = await fetch('/api/config/status');
    const body = await res.json();
    if (body.missing_keys && body.missing_keys.length > 0) {
      const banner = document.getElementById('keys-warning');
      banner.textContent = '⚠️ API keys not detected. Please set: ' + body.missing_keys.join(', ');
      banner.style.display = 'block';
    }
  } catch (e) { /* status endpoint is best-effort */ }
})();

function collectForm() {
  const goals = Array.from(document.querySelectorAll('#goals input:checked')).map(el => el.value);
  return {
    age: parseInt(document.getElementById('age').value, 10) || 30,
    gender: document.getElementById('gender').value,
    height: document.getElementById('height').value,
    weight: document.getElementById('weight').value,
    activity_level: document.getElementById('activity_level').value,
    goals: goals,
    medical_conditions: document.getElementById('medical_conditions').value,
    medications: document.getElementById('medications').value,
    allergies: document.getElementById('allergies').value,
    food_preferences: document.getElementById('food_preferences').value,
    cooking_ability: document.getElementById('cooking_ability').value,
    budget: document.getElementById('budget').value,
    cultural_factors: document.getElementById('cultural_factors').value,
  };
}

function showError(message) {
  const banner = document.getElementById('form-error');
  banner.textContent = message;
  banner.style.display = 'block';
}

document.getElementById('submit').addEventListener('click', async () => {
  document.getElementById('form-error').style.display = 'none';
  document.getElementById('plan-ready').style.display = 'none';
  document.getElementById('plan').style.display = 'none';
  document.getElementById('download').style.display = 'none';
  document.getElementById('summary').style.display = 'none';

  const form = collectForm();
  if (form.goals.length === 0) {
    showError('Please select at least one nutrition goal.');
    return;
  }

  const spinner = document.getElementById('spinner');
  const submit = document.getElementById('submit');
  spinner.style.display = 'block';
  submit.disabled = true;

  try {
    const res = await fetch('/api/plan', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(form),
    });
    const body = await res.json();
    if (!res.ok) {
      showError(body.error || 'An error occurred.');
      return;
    }

    document.getElementById('summary-json').textContent = JSON.stringify(body.profile, null, 2);
    document.getElementById('summary').style.display = 'block';
    document.getElementById('plan-ready').style.display = 'block';
    const planEl = document.getElementById('plan');
    planEl.textContent = body.plan;
    planEl.style.display = 'block';

    const download = document.getElementById('download');
    download.style.display = 'inline-block';
    download.onclick = () => {
      const blob = new Blob([body.plan], { type: 'text/markdown' });
      const a = document.createElement('a');
      a.href = URL.createObjectURL(blob);
      a.download = body.filename || 'my_nutrition_plan.md';
      a.click();
      URL.revokeObjectURL(a.href);
    };
  } catch (e) {
    showError('An error occurred: ' + e.message);
  } finally {
    spinner.style.display = 'none';
    submit.disabled = false;
  }
});
</script>
</body>
</html>
"#;
