use crate::cli::commands::DeleteArgs;
use crate::cli::open_store;
use crate::errors::ScanboardError;

pub async fn handle_delete(args: DeleteArgs) -> Result<(), ScanboardError> {
    let (_, db) = open_store(&args.store).await?;
    if !db.delete_scan(args.scan_id)? {
        return Err(ScanboardError::NotFound(args.scan_id));
    }
    println!("Deleted scan {}", args.scan_id);
    Ok(())
}
