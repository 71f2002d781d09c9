#![allow(clippy::all)]
#![allow(missing_docs)]

use ethers::contract::abigen;

abigen!(
    IInterchainTokenService,
    r#"[
        function deployTokenManager(bytes32 salt, string destinationChain, uint8 tokenManagerType, bytes params, uint256 gasValue) payable returns (bytes32)
        function interchainTokenId(address deployer, bytes32 salt) view returns (bytes32)
        function tokenManagerAddress(bytes32 tokenId) view returns (address)
        function interchainTransfer(bytes32 tokenId, string destinationChain, bytes destinationAddress, uint256 amount, bytes metadata, uint256 gasValue) payable
    ]"#
);

abigen!(
    MinterAccessControl,
    r#"[
        function MINTER_ROLE() view returns (bytes32)
        function getRoleAdmin(bytes32 role) view returns (bytes32)
        function hasRole(bytes32 role, address account) view returns (bool)
        function grantRole(bytes32 role, address account)
    ]"#
);
