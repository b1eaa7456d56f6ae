/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
/// Time range filters for quote and tick reads
pub mod range;
/// Quote, tick and fundamental records
pub mod records;
/// Validated instrument symbols
pub mod symbol;
