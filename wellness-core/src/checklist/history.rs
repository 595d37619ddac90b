use crate::error::WellnessError;
use crate::models::ChecklistEntry;
use crate::owner::OwnerId;
use crate::records::from_rows;
use wellness_store::{Order, Query, RecordStore, Table};

/// Every checklist answer recorded for `owner`, newest date first
pub async fn checklist_entries(
    store: &dyn RecordStore,
    owner: &OwnerId,
) -> Result<Vec<ChecklistEntry>, WellnessError> {
    let query = Query::new()
        .eq("user_id", owner.as_value())
        .order_by(Order::desc("date_recorded"));

    let rows = store
        .select(Table::DailyChecklist, &query)
        .await
        .map_err(|source| WellnessError::StoreRead {
            table: Table::DailyChecklist,
            source,
        })?;

    from_rows(rows).map_err(|source| WellnessError::Decode {
        table: Table::DailyChecklist,
        source,
    })
}
