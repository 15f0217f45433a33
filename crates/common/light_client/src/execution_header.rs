use alloy_primitives::{Address, B64, B256, Bloom, U256};
use borsh::{BorshDeserialize, BorshSerialize, io};

/// Execution block header in the destination contract's canonical layout.
///
/// Field order is the wire order. `gas_limit` and `gas_used` stay 256-bit on
/// the wire even though the RPC reports them as u64.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ExecutionBlockHeader {
    pub parent_hash: B256,
    pub uncles_hash: B256,
    pub author: Address,
    pub state_root: B256,
    pub transactions_root: B256,
    pub receipts_root: B256,
    pub log_bloom: Bloom,
    pub difficulty: U256,
    pub number: u64,
    pub gas_limit: U256,
    pub gas_used: U256,
    pub timestamp: u64,
    pub extra_data: Vec<u8>,
    pub mix_hash: B256,
    pub nonce: B64,
    pub base_fee_per_gas: Option<u64>,
    pub withdrawals_root: Option<B256>,
    pub blob_gas_used: Option<u64>,
    pub excess_blob_gas: Option<u64>,
    pub parent_beacon_block_root: Option<B256>,
    pub requests_hash: Option<B256>,
    /// Hash reported by the RPC, carried so the contract can cross-check.
    pub hash: Option<B256>,
    /// Computed inside the contract, never populated on the relay side.
    pub partial_hash: Option<B256>,
}

impl BorshSerialize for ExecutionBlockHeader {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        self.parent_hash.0.serialize(writer)?;
        self.uncles_hash.0.serialize(writer)?;
        self.author.0.0.serialize(writer)?;
        self.state_root.0.serialize(writer)?;
        self.transactions_root.0.serialize(writer)?;
        self.receipts_root.0.serialize(writer)?;
        self.log_bloom.0.0.serialize(writer)?;
        self.difficulty.to_le_bytes::<32>().serialize(writer)?;
        self.number.serialize(writer)?;
        self.gas_limit.to_le_bytes::<32>().serialize(writer)?;
        self.gas_used.to_le_bytes::<32>().serialize(writer)?;
        self.timestamp.serialize(writer)?;
        self.extra_data.serialize(writer)?;
        self.mix_hash.0.serialize(writer)?;
        self.nonce.0.serialize(writer)?;
        self.base_fee_per_gas.serialize(writer)?;
        self.withdrawals_root.map(|root| root.0).serialize(writer)?;
        self.blob_gas_used.serialize(writer)?;
        self.excess_blob_gas.serialize(writer)?;
        self.parent_beacon_block_root
            .map(|root| root.0)
            .serialize(writer)?;
        self.requests_hash.map(|hash| hash.0).serialize(writer)?;
        self.hash.map(|hash| hash.0).serialize(writer)?;
        self.partial_hash.map(|hash| hash.0).serialize(writer)
    }
}

impl BorshDeserialize for ExecutionBlockHeader {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        Ok(ExecutionBlockHeader {
            parent_hash: <[u8; 32]>::deserialize_reader(reader)?.into(),
            uncles_hash: <[u8; 32]>::deserialize_reader(reader)?.into(),
            author: <[u8; 20]>::deserialize_reader(reader)?.into(),
            state_root: <[u8; 32]>::deserialize_reader(reader)?.into(),
            transactions_root: <[u8; 32]>::deserialize_reader(reader)?.into(),
            receipts_root: <[u8; 32]>::deserialize_reader(reader)?.into(),
            log_bloom: Bloom::from(<[u8; 256]>::deserialize_reader(reader)?),
            difficulty: U256::from_le_bytes(<[u8; 32]>::deserialize_reader(reader)?),
            number: u64::deserialize_reader(reader)?,
            gas_limit: U256::from_le_bytes(<[u8; 32]>::deserialize_reader(reader)?),
            gas_used: U256::from_le_bytes(<[u8; 32]>::deserialize_reader(reader)?),
            timestamp: u64::deserialize_reader(reader)?,
            extra_data: Vec::<u8>::deserialize_reader(reader)?,
            mix_hash: <[u8; 32]>::deserialize_reader(reader)?.into(),
            nonce: <[u8; 8]>::deserialize_reader(reader)?.into(),
            base_fee_per_gas: Option::<u64>::deserialize_reader(reader)?,
            withdrawals_root: Option::<[u8; 32]>::deserialize_reader(reader)?.map(B256::from),
            blob_gas_used: Option::<u64>::deserialize_reader(reader)?,
            excess_blob_gas: Option::<u64>::deserialize_reader(reader)?,
            parent_beacon_block_root: Option::<[u8; 32]>::deserialize_reader(reader)?
                .map(B256::from),
            requests_hash: Option::<[u8; 32]>::deserialize_reader(reader)?.map(B256::from),
            hash: Option::<[u8; 32]>::deserialize_reader(reader)?.map(B256::from),
            partial_hash: Option::<[u8; 32]>::deserialize_reader(reader)?.map(B256::from),
        })
    }
}

impl From<&alloy_rpc_types_eth::Header> for ExecutionBlockHeader {
    fn from(header: &alloy_rpc_types_eth::Header) -> Self {
        ExecutionBlockHeader {
            parent_hash: header.inner.parent_hash,
            uncles_hash: header.inner.ommers_hash,
            author: header.inner.beneficiary,
            state_root: header.inner.state_root,
            transactions_root: header.inner.transactions_root,
            receipts_root: header.inner.receipts_root,
            log_bloom: header.inner.logs_bloom,
            difficulty: header.inner.difficulty,
            number: header.inner.number,
            gas_limit: U256::from(header.inner.gas_limit),
            gas_used: U256::from(header.inner.gas_used),
            timestamp: header.inner.timestamp,
            extra_data: header.inner.extra_data.to_vec(),
            mix_hash: header.inner.mix_hash,
            nonce: header.inner.nonce,
            base_fee_per_gas: header.inner.base_fee_per_gas,
            withdrawals_root: header.inner.withdrawals_root,
            blob_gas_used: header.inner.blob_gas_used,
            excess_blob_gas: header.inner.excess_blob_gas,
            parent_beacon_block_root: header.inner.parent_beacon_block_root,
            requests_hash: header.inner.requests_hash,
            hash: Some(header.hash),
            partial_hash: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, b256, bytes};

    use super::*;

    fn sample_header() -> ExecutionBlockHeader {
        ExecutionBlockHeader {
            parent_hash: B256::repeat_byte(0x01),
            uncles_hash: B256::repeat_byte(0x02),
            author: address!("0x00000000219ab540356cBB839Cbe05303d7705Fa"),
            state_root: B256::repeat_byte(0x03),
            transactions_root: B256::repeat_byte(0x04),
            receipts_root: B256::repeat_byte(0x05),
            log_bloom: Bloom::repeat_byte(0x06),
            difficulty: U256::ZERO,
            number: 21_000_000,
            gas_limit: U256::from(30_000_000u64),
            gas_used: U256::from(12_345_678u64),
            timestamp: 1_734_000_000,
            extra_data: vec![0xBE, 0xEF],
            mix_hash: B256::repeat_byte(0x07),
            nonce: B64::ZERO,
            base_fee_per_gas: Some(7),
            withdrawals_root: Some(B256::repeat_byte(0x08)),
            blob_gas_used: Some(0),
            excess_blob_gas: Some(0),
            parent_beacon_block_root: Some(B256::repeat_byte(0x09)),
            requests_hash: None,
            hash: Some(B256::repeat_byte(0x0A)),
            partial_hash: None,
        }
    }

    #[test]
    fn test_borsh_round_trip() {
        let header = sample_header();
        let encoded = borsh::to_vec(&header).unwrap();
        assert_eq!(
            borsh::from_slice::<ExecutionBlockHeader>(&encoded).unwrap(),
            header
        );
        // Encoding is deterministic.
        assert_eq!(encoded, borsh::to_vec(&header).unwrap());
    }

    #[test]
    fn test_borsh_layout() {
        let header = sample_header();
        let encoded = borsh::to_vec(&header).unwrap();

        // Fixed prefix: six hashes and the author address.
        assert_eq!(&encoded[..32], &[0x01; 32]);
        assert_eq!(&encoded[64..84], header.author.as_slice());
        let bloom_end = 84 + 32 * 3 + 256;
        // Little-endian difficulty follows the bloom.
        assert_eq!(&encoded[bloom_end..bloom_end + 32], &[0x00; 32]);
        let number_offset = bloom_end + 32;
        assert_eq!(
            &encoded[number_offset..number_offset + 8],
            &21_000_000u64.to_le_bytes()
        );

        // extra_data is a length-prefixed vec.
        let extra_offset = number_offset + 8 + 32 + 32 + 8;
        assert_eq!(
            &encoded[extra_offset..extra_offset + 6],
            &[0x02, 0x00, 0x00, 0x00, 0xBE, 0xEF]
        );

        // Options: present values carry a 1 flag, absent ones a lone 0.
        let options_offset = extra_offset + 6 + 32 + 8;
        assert_eq!(encoded[options_offset], 1);
        assert_eq!(
            &encoded[options_offset + 1..options_offset + 9],
            &7u64.to_le_bytes()
        );
        let requests_hash_offset = options_offset + 9 + 33 + 9 + 9 + 33;
        assert_eq!(encoded[requests_hash_offset], 0);
        assert_eq!(encoded[requests_hash_offset + 1], 1);
        // partial_hash trails as a lone 0 flag.
        assert_eq!(encoded[encoded.len() - 1], 0);
        assert_eq!(encoded.len(), requests_hash_offset + 1 + 33 + 1);
    }

    #[test]
    fn test_borsh_rejects_bad_option_flag() {
        let header = sample_header();
        let mut encoded = borsh::to_vec(&header).unwrap();
        let last = encoded.len() - 1;
        encoded[last] = 2;
        assert!(borsh::from_slice::<ExecutionBlockHeader>(&encoded).is_err());
    }

    #[test]
    fn test_borsh_rejects_truncated_input() {
        let encoded = borsh::to_vec(&sample_header()).unwrap();
        assert!(borsh::from_slice::<ExecutionBlockHeader>(&encoded[..encoded.len() - 1]).is_err());
    }

    #[test]
    fn test_from_rpc_header() {
        let rpc_header = alloy_rpc_types_eth::Header {
            hash: b256!("0x88e96d4537bea4d9c05d12549907b32561d3bf31f45aae734cdc119f13406cb6"),
            inner: alloy_consensus::Header {
                parent_hash: B256::repeat_byte(0x01),
                ommers_hash: B256::repeat_byte(0x02),
                beneficiary: address!("0x00000000219ab540356cBB839Cbe05303d7705Fa"),
                state_root: B256::repeat_byte(0x03),
                transactions_root: B256::repeat_byte(0x04),
                receipts_root: B256::repeat_byte(0x05),
                logs_bloom: Bloom::repeat_byte(0x06),
                difficulty: U256::ZERO,
                number: 21_000_000,
                gas_limit: 30_000_000,
                gas_used: 12_345_678,
                timestamp: 1_734_000_000,
                extra_data: bytes!("0xbeef"),
                mix_hash: B256::repeat_byte(0x07),
                nonce: B64::ZERO,
                base_fee_per_gas: Some(7),
                withdrawals_root: Some(B256::repeat_byte(0x08)),
                blob_gas_used: Some(0),
                excess_blob_gas: Some(0),
                parent_beacon_block_root: Some(B256::repeat_byte(0x09)),
                requests_hash: None,
            },
            total_difficulty: None,
            size: None,
        };

        let header = ExecutionBlockHeader::from(&rpc_header);
        assert_eq!(header.hash, Some(rpc_header.hash));
        assert_eq!(header.partial_hash, None);
        assert_eq!(header.gas_limit, U256::from(30_000_000u64));
        assert_eq!(header.extra_data, vec![0xBE, 0xEF]);
        assert_eq!(header.number, 21_000_000);
    }
}
