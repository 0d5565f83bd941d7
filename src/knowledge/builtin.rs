//! Built-in disease information blocks.
//!
//! Keyword order matters: the first keyword found in a prompt wins.

pub(super) const DIABETES: &str = "**Diabetes Mellitus**

**Brief Description:** Diabetes is a chronic condition affecting how the body processes blood sugar.

**Common Symptoms:**
- Frequent urination
- Increased thirst and hunger
- Extreme fatigue
- Slow-healing wounds
- Blurred vision

**Treatment Options:**
1. Lifestyle modifications (diet, exercise)
2. Medications (Metformin, Insulin)
3. Regular blood sugar monitoring
4. Healthcare provider consultation

**Prevention:** Maintain healthy weight, exercise regularly, eat balanced diet, manage stress.

**When to Seek Help:** If experiencing persistent symptoms or blood sugar levels are consistently high.";

pub(super) const HYPERTENSION: &str = "**Hypertension (High Blood Pressure)**

**Brief Description:** A condition where blood pressure remains abnormally high.

**Common Symptoms:**
- Often asymptomatic (silent killer)
- Headaches
- Dizziness
- Chest pain
- Shortness of breath

**Treatment Options:**
1. DASH diet and reduced salt
2. Regular exercise
3. Medications (ACE inhibitors, Beta-blockers)
4. Stress management

**Prevention:** Maintain healthy weight, limit alcohol, exercise regularly, manage stress.

**When to Seek Help:** Blood pressure consistently above 130/80 mmHg or experiencing severe symptoms.";

pub(super) const ASTHMA: &str = "**Asthma**

**Brief Description:** A chronic respiratory disease causing inflammation and narrowing of airways.

**Common Symptoms:**
- Wheezing and coughing
- Shortness of breath
- Chest tightness
- Difficulty during physical activity

**Treatment Options:**
1. Quick-relief inhalers (Albuterol)
2. Long-term control medications
3. Avoiding triggers
4. Peak flow monitoring

**Prevention:** Identify triggers, take medications as prescribed, maintain healthy lifestyle.

**When to Seek Help:** Severe shortness of breath or blue lips/face.";

pub(super) const GENERAL_HEALTH: &str = "**General Health Information**

**About Your Query:** While specific information about your query is not available, here are general recommendations:

**General Health Tips:**
- Maintain regular exercise (150 mins/week)
- Eat balanced, nutritious meals
- Get 7-9 hours of sleep
- Manage stress through relaxation
- Stay hydrated
- Have regular medical check-ups
- Keep medications organized

**When to Consult a Doctor:**
- Persistent symptoms lasting >2 weeks
- Severe pain or discomfort
- Difficulty breathing or chest pain
- Sudden vision or hearing changes
- Signs of infection (fever, persistent cough)

**Always consult qualified healthcare professionals for proper diagnosis and treatment.";

/// Built-in `(keyword, info)` pairs in match order.
pub(super) const ENTRIES: [(&str, &str); 3] = [
    ("diabetes", DIABETES),
    ("hypertension", HYPERTENSION),
    ("asthma", ASTHMA),
];
