pub mod arret;
pub mod horaire;
pub mod horaire_arret;
pub mod trajet;

use crate::error::ServiceError;

fn non_blank(nom: &str) -> Result<String, ServiceError> {
    let nom = nom.trim();
    if nom.is_empty() {
        return Err(ServiceError::BlankName);
    }
    Ok(nom.to_owned())
}
