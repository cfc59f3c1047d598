//! JSON body of `POST /api/submit`.

use serde::Serialize;

use crate::province::ProvinceSet;
use crate::state::FormState;
use crate::variant::VariantFields;

/// The flat record the endpoint expects.
///
/// Every key is always present; fields that do not exist in the active
/// variant are sent as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub province: ProvinceSet,
    pub course: String,
    pub training_date: String,
    pub phone: String,
    pub cost_center: String,
    pub eenheid: String,
    pub team: String,
    pub message: String,
    pub privacy_accepted: bool,
}

impl From<&FormState> for SubmissionPayload {
    fn from(state: &FormState) -> Self {
        let (training_date, cost_center, phone) = match &state.fields {
            VariantFields::Training(t) => {
                (t.training_date.clone(), t.cost_center.clone(), String::new())
            }
            VariantFields::Team(t) => (String::new(), String::new(), t.phone.clone()),
        };
        Self {
            name: state.name.clone(),
            email: state.email.clone(),
            province: state.provinces.clone(),
            course: state.fields.course().to_owned(),
            training_date,
            phone,
            cost_center,
            eenheid: state.eenheid.clone(),
            team: state.team.clone(),
            message: state.message.clone(),
            privacy_accepted: state.privacy_accepted,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::province::Province;
    use crate::variant::Variant;

    #[test]
    fn team_payload_carries_fixed_course_and_empty_training_fields() {
        let mut state = FormState::initial(Variant::Team, None);
        state.set_phone("06 1234 5678");
        state.toggle_province(Province::Friesland);
        let json = serde_json::to_value(SubmissionPayload::from(&state)).unwrap();
        assert_eq!(json["course"], "Team trajecten");
        assert_eq!(json["phone"], "06 1234 5678");
        assert_eq!(json["trainingDate"], "");
        assert_eq!(json["costCenter"], "");
        assert_eq!(json["province"], serde_json::json!(["Friesland"]));
        assert_eq!(json["privacyAccepted"], false);
    }

    #[test]
    fn payload_uses_the_endpoint_key_names() {
        let state = FormState::initial(Variant::Training, Some("Agile Coach Opleiding"));
        let json = serde_json::to_value(SubmissionPayload::from(&state)).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "costCenter",
                "course",
                "eenheid",
                "email",
                "message",
                "name",
                "phone",
                "privacyAccepted",
                "province",
                "team",
                "trainingDate",
            ]
        );
        assert_eq!(json["course"], "Agile Coach Opleiding");
    }
}
