use stationhub_error::{HubResult, ResultExt, StoreError, ValidationError};

use super::{CommandExecute, CompanyForm, Validate};
use crate::{
    application::stations_for_company_tree,
    database::{Company, CompanyId, NewCompany, Station},
    engine::{Storage, StorageEngine},
};

/// Команда `GET /api/company`: все компании по возрастанию id.
#[derive(Debug)]
pub struct ListCompaniesCommand;

/// Команда `POST /api/company`.
///
/// Проверяет форму и существование родителя, затем создаёт компанию.
#[derive(Debug)]
pub struct CreateCompanyCommand {
    pub form: CompanyForm,
}

/// Команда `GET /api/company/{id}`.
#[derive(Debug)]
pub struct GetCompanyCommand {
    pub id: CompanyId,
}

/// Команда `PUT /api/company/{id}`.
///
/// Полная замена: без `parent_company_id` компания становится корневой.
/// Сначала проверяется существование компании (404), затем форма (400).
#[derive(Debug)]
pub struct UpdateCompanyCommand {
    pub id: CompanyId,
    pub form: CompanyForm,
}

/// Команда `DELETE /api/company/{id}`. Дочерние компании и станции не
/// удаляются.
#[derive(Debug)]
pub struct DeleteCompanyCommand {
    pub id: CompanyId,
}

/// Команда `GET /api/child-stations/{company_id}`: станции компании и всех
/// её потомков.
#[derive(Debug)]
pub struct ChildStationsCommand {
    pub company_id: CompanyId,
}

impl CommandExecute for ListCompaniesCommand {
    type Output = Vec<Company>;

    fn execute(
        &self,
        store: &StorageEngine,
    ) -> HubResult<Vec<Company>> {
        store
            .list_companies()
            .map_err(|e| StoreError::backend("retrieve companies", e).into())
    }

    fn command_name(&self) -> &'static str {
        "LIST_COMPANIES"
    }
}

impl CommandExecute for CreateCompanyCommand {
    type Output = Company;

    fn execute(
        &self,
        store: &StorageEngine,
    ) -> HubResult<Company> {
        let company = self.form.clone().validate()?;
        ensure_parent_exists(store, &company)?;
        store.insert_company(company).context("Creating company")
    }

    fn command_name(&self) -> &'static str {
        "CREATE_COMPANY"
    }
}

impl CommandExecute for GetCompanyCommand {
    type Output = Company;

    fn execute(
        &self,
        store: &StorageEngine,
    ) -> HubResult<Company> {
        find_company(store, self.id)
    }

    fn command_name(&self) -> &'static str {
        "GET_COMPANY"
    }
}

impl CommandExecute for UpdateCompanyCommand {
    type Output = Company;

    fn execute(
        &self,
        store: &StorageEngine,
    ) -> HubResult<Company> {
        find_company(store, self.id)?;
        let company = self.form.clone().validate()?;
        ensure_parent_exists(store, &company)?;
        store
            .update_company(self.id, company)
            .with_context(|| format!("Updating company {}", self.id))
    }

    fn command_name(&self) -> &'static str {
        "UPDATE_COMPANY"
    }
}

impl CommandExecute for DeleteCompanyCommand {
    type Output = ();

    fn execute(
        &self,
        store: &StorageEngine,
    ) -> HubResult<()> {
        if store.delete_company(self.id)? {
            Ok(())
        } else {
            Err(StoreError::CompanyNotFound { id: self.id.get() }.into())
        }
    }

    fn command_name(&self) -> &'static str {
        "DELETE_COMPANY"
    }
}

impl CommandExecute for ChildStationsCommand {
    type Output = Vec<Station>;

    fn execute(
        &self,
        store: &StorageEngine,
    ) -> HubResult<Vec<Station>> {
        stations_for_company_tree(store, self.company_id)
    }

    fn command_name(&self) -> &'static str {
        "CHILD_STATIONS"
    }
}

/// Загружает компанию или возвращает `CompanyNotFound`.
fn find_company(
    store: &StorageEngine,
    id: CompanyId,
) -> HubResult<Company> {
    store
        .get_company(id)?
        .ok_or_else(|| StoreError::CompanyNotFound { id: id.get() }.into())
}

fn ensure_parent_exists(
    store: &StorageEngine,
    company: &NewCompany,
) -> HubResult<()> {
    if let Some(parent) = company.parent_company_id {
        if !store.company_exists(parent)? {
            return Err(ValidationError::UnknownCompany {
                field: "parent_company_id",
                id: parent.get(),
            }
            .into());
        }
    }
    Ok(())
}
